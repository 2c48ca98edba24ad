/// Fixed traveler advice printed on every document, invoice and receipt
/// alike, numbered from 1 in this order.
pub const TRAVEL_TIPS: [&str; 6] = [
    "الوصول للمطار قبل الإقلاع بساعتين",
    "احتفظ بنسخة من التذكرة وجواز السفر",
    "الوزن المسموح قد يختلف حسب شركة الطيران",
    "للدعم والطوارئ تواصل معنا على الرقم أدناه",
    "تأكد من صحة جواز السفر قبل السفر",
    "احتفظ برقم رحلة الطيران معك",
];
