//! Page renderers. Each turns a descriptor into a markup fragment and never
//! touches the document; icons arrive pre-resolved in an [`IconTable`].

pub mod about;
pub mod contact;
pub mod controller;
pub mod experience;
pub mod generic;
pub mod home;
pub mod navigation;
pub mod resources;

use contracts::pages::PageContent;

use crate::shared::svg_cache::IconTable;

pub fn render_page(content: &PageContent, icons: &IconTable) -> String {
    match content {
        PageContent::Home(page) => home::render(page),
        PageContent::About(page) => about::render(page, icons),
        PageContent::Experience(page) => experience::render(page),
        PageContent::Contact(page) => contact::render(page, icons),
        PageContent::Resources(page) => resources::render(page),
        PageContent::Generic(page) => generic::render(page),
    }
}
