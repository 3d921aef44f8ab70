use crate::i18n::t;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <h1 class="logo">{ t("header.title") }</h1>
            <div class="logo-subtext">{ t("header.subtitle") }</div>
            <p class="tagline">{ t("header.tagline") }</p>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_renders_branding_and_skip_link() {
        let html = block_on(LocalServerRenderer::<Header>::new().render());
        assert!(html.contains("href=\"#main\""));
        assert!(html.contains("PAPER COMPANY, INC."));
        assert!(html.contains("Internal Use Only"));
    }
}
