use yew::prelude::*;

use crate::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Anchored page block with a heading. `id` is the in-page anchor.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
      <section id={props.id.clone()} class="section reveal">
        <div class="container">
          <div class="section-head">
            <h2>{ props.title.clone() }</h2>
            if let Some(sub) = &props.subtitle {
              <p class="muted">{ sub.clone() }</p>
            }
          </div>
          <div class="section-body">
            { props.children.clone() }
          </div>
        </div>
      </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub anchor: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    html! {
      <a class={classes!("nav-link", props.class.clone())} href={format!("#{}", props.anchor)}>
        { props.label.clone() }
      </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
      <article class={classes!("card", props.class.clone())} style={props.style.clone()}>
        if let Some(title) = &props.title {
          <header class="card-header"><h3>{ title.clone() }</h3></header>
        }
        <div class="card-body">
          { props.children.clone() }
        </div>
      </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

// Decorative only; screen readers get the adjacent text.
#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
      <span class={classes!("icon", props.icon.css_class())} aria-hidden="true">
        { props.icon.glyph() }
      </span>
    }
}
