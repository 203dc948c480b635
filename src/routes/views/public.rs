use askama::Template;

use super::{
    flash::Flash,
    page::{Chrome, PageResult, render},
};

#[derive(Template)]
#[template(path = "landing.html")]
struct LandingTemplate {
    chrome: Chrome,
}

pub async fn landing(flash: Flash) -> PageResult {
    let chrome = Chrome::new(&flash);
    render(&LandingTemplate { chrome }, &flash)
}
