use super::PageHeader;

/// Landing view. Pure presentation, no collaborators.
pub struct HomeController {
    page_header: PageHeader,
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeViewModel {
    pub page_header: PageHeader,
    pub message: String,
}

impl HomeController {
    pub fn new() -> Self {
        Self {
            page_header: PageHeader::new("The Blog Site"),
            message: "Welcome to my Blog Site!".to_string(),
        }
    }

    pub fn view_model(&self) -> HomeViewModel {
        HomeViewModel {
            page_header: self.page_header.clone(),
            message: self.message.clone(),
        }
    }
}

impl Default for HomeController {
    fn default() -> Self {
        Self::new()
    }
}
