pub mod company;
pub mod format;
pub mod renderer;
pub mod tips;

pub use company::CompanyProfile;
pub use renderer::DocumentRenderer;
