/// Fixed agency identity printed on every document
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub name_ar: String,
    pub name_en: String,
    pub logo_text: String,
    pub address: String,
    pub phone: String,
    pub support_phone: String,
    pub email: String,
    pub website: String,
    pub agent: String,
    pub tagline: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name_ar: "شركة المنوال للسفر والسياحة".to_string(),
            name_en: "Al Manwal Travel & Tourism".to_string(),
            logo_text: "المنوال".to_string(),
            address: "تاجوراء، طرابلس، ليبيا".to_string(),
            phone: "0925-987654".to_string(),
            support_phone: "0913031006".to_string(),
            email: "info@almanwal-travel.ly".to_string(),
            website: "www.almanwal-travel.ly".to_string(),
            agent: "أيوب التركي".to_string(),
            tagline: "نحن نقدم أفضل الخدمات في مجال السفر والسياحة مع ضمان الجودة والأمان"
                .to_string(),
        }
    }
}
