//! Default Persian UI strings.

pub const ENTRIES: &[(&str, &str)] = &[
    ("app.title", "طراح شبکه نوری غیرفعال"),
    ("nav.designer", "طراحی"),
    ("nav.catalog", "کاتالوگ تجهیزات"),
    ("nav.settings", "تنظیمات"),
    ("nav.logout", "خروج"),
    ("auth.login", "ورود"),
    ("auth.email", "ایمیل"),
    ("auth.password", "رمز عبور"),
    ("auth.register", "ثبت نام"),
    ("auth.verify", "تایید ایمیل"),
    ("catalog.olt", "OLT"),
    ("catalog.ont", "ONT"),
    ("catalog.model", "مدل"),
    ("catalog.technology", "فناوری"),
    ("catalog.ponPorts", "پورت‌های PON"),
    ("catalog.uplinkPorts", "پورت‌های آپلینک"),
    ("catalog.ethernetPorts", "پورت‌های اترنت"),
    ("catalog.fxsPorts", "پورت‌های تلفن"),
    ("catalog.wifi", "وای‌فای"),
    ("settings.smtp", "تنظیمات ایمیل"),
    ("settings.smtpHost", "سرور SMTP"),
    ("settings.smtpPort", "پورت"),
    ("settings.save", "ذخیره"),
    ("settings.saved", "تنظیمات ذخیره شد"),
    ("settings.translations", "ترجمه‌ها"),
    ("settings.resetTranslations", "بازگردانی ترجمه‌های پیش‌فرض"),
    ("database.title", "مدیریت پایگاه داده"),
    ("database.status", "وضعیت"),
    ("database.backup", "پشتیبان‌گیری"),
    ("database.backupSuccess", "پشتیبان با موفقیت دانلود شد"),
    ("database.backupError", "پشتیبان‌گیری ناموفق بود"),
    ("database.reset", "بازنشانی پایگاه داده"),
    ("database.resetConfirm", "برای تایید، عبارت RESET را وارد کنید"),
    ("database.resetSuccess", "پایگاه داده بازنشانی شد"),
    ("database.resetError", "بازنشانی پایگاه داده ناموفق بود"),
];
