use gloo::console::{log, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::{Card, IconGlyph, NavLink, Section};
use crate::contact::{FormStatus, QuickMessage, DEMO_NOTE};
use crate::content::{
    copyright_line, internship_focus_line, ABOUT_TAGS, COMPANY, COURSES, DOMAINS,
    FOOTER_COURSES, FOOTER_EXPLORE_LINKS, HIRING_CRITERIA, INTERNSHIP_POINTS, NAV_LINKS,
    PROJECT_AREAS, PROJECT_HIGHLIGHTS, ROLES,
};
use crate::icons::Icon;
use crate::links::{mailto, tel, MailSubject};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct PageProps {
    /// Calendar year shown in the footer. Fixed for the life of the page.
    pub year: i32,
    #[prop_or_default]
    pub initial_theme: Theme,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let theme = {
        let initial = props.initial_theme;
        use_state(move || initial)
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_e: MouseEvent| {
            let next = (*theme).toggled();
            log!("theme:", next.label());
            theme.set(next);
        })
    };

    html! {
      <div class={classes!("site", theme.css_class())}>
        <SiteHeader theme={*theme} on_toggle={on_toggle_theme} />
        <main>
          <Hero />
          <AboutSection />
          <DomainsSection />
          <InternshipsSection />
          <HiringSection />
          <CoursesSection />
          <ProjectsSection />
          <ContactSection />
        </main>
        <SiteFooter year={props.year} />
      </div>
    }
}

/* -----------------------------
   Header + hero
----------------------------- */

#[derive(Properties, PartialEq)]
struct HeaderProps {
    theme: Theme,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(SiteHeader)]
fn site_header(props: &HeaderProps) -> Html {
    html! {
      <header class="topbar">
        <div class="container topbar-row">
          <a class="brand" href="#">
            <IconGlyph icon={Icon::Rocket} />
            <span>{ COMPANY.name }</span>
          </a>
          <nav class="nav">
            { for NAV_LINKS.iter().map(|n| html! {
                <NavLink key={n.anchor} anchor={n.anchor} label={n.label} />
            }) }
          </nav>
          <div class="actions">
            <button
              type="button"
              class="btn btn-outline btn-icon"
              aria-label="Toggle theme"
              title={format!("Theme: {}", props.theme.label())}
              onclick={props.on_toggle.clone()}
            >
              <IconGlyph icon={props.theme.toggle_icon()} />
            </button>
            <a class="btn" href="#contact">{ "Get in touch" }</a>
          </div>
        </div>
      </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let facts: [(&str, String); 4] = [
        ("Founded", COMPANY.founded.to_string()),
        ("Industry", COMPANY.industry.to_string()),
        ("Company Size", COMPANY.size.to_string()),
        ("Community", COMPANY.members_note.to_string()),
    ];

    html! {
      <div class="hero">
        <div class="container reveal">
          <h1>{ COMPANY.tagline }</h1>
          <p class="lead muted">{ COMPANY.mission }</p>
          <div class="cta-row">
            <a class="btn btn-lg" href="#internships">
              <IconGlyph icon={Icon::GraduationCap} />{ " Explore Internships" }
            </a>
            <a class="btn btn-lg btn-outline" href="#jobs">
              <IconGlyph icon={Icon::Users} />{ " See Open Roles" }
            </a>
          </div>
          <div class="facts">
            { for facts.into_iter().map(|(label, value)| html! {
                <div class="fact">
                  <div class="fact-label">{ label }</div>
                  <div>{ value }</div>
                </div>
            }) }
          </div>
        </div>
      </div>
    }
}

/* -----------------------------
   Content sections
----------------------------- */

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
      <Section id="about" title="About us"
        subtitle="We are enthusiastic to work with experts and learners across Data Science and adjacent domains.">
        <div class="grid grid-3">
          <Card title="Who we are" class="span-2">
            <p>
              { format!("{} focuses on Data Science, Machine Learning, Deep Learning, Data Analytics, Database Management, Data Architecture, Predictive Analytics, Data Visualization, Forecasting, Statistical Modeling, and core Statistics.", COMPANY.name) }
            </p>
            <p>
              { "Our purpose is to connect users with internships and job opportunities in these fields while nurturing practical, industry-ready skills through projects and mentorship." }
            </p>
            <div class="tags">
              { for ABOUT_TAGS.iter().map(|t| html! { <span key={*t} class="tag">{ *t }</span> }) }
            </div>
          </Card>
          <Card title="At a glance">
            <div class="glance-row"><IconGlyph icon={Icon::Building} /><span>{ COMPANY.industry }</span></div>
            <div class="glance-row"><IconGlyph icon={Icon::Calendar} /><span>{ format!("Founded {}", COMPANY.founded) }</span></div>
            <div class="glance-row"><IconGlyph icon={Icon::Users} /><span>{ COMPANY.size }</span></div>
            <div class="glance-row"><IconGlyph icon={Icon::Phone} /><a href={tel(COMPANY.phone)}>{ COMPANY.phone }</a></div>
            <div class="glance-row"><IconGlyph icon={Icon::Mail} /><a href={mailto(COMPANY.email, None)}>{ COMPANY.email }</a></div>
          </Card>
        </div>
      </Section>
    }
}

#[function_component(DomainsSection)]
fn domains_section() -> Html {
    html! {
      <Section id="domains" title="What we do" subtitle="Core domains and capabilities">
        <div class="grid grid-3">
          { for DOMAINS.iter().enumerate().map(|(i, d)| html! {
              <Card
                key={d.label}
                class="domain-card"
                style={AttrValue::from(format!("animation-delay: {}ms", i * 30))}
              >
                <div class="domain-row">
                  <IconGlyph icon={d.icon} />
                  <span class="domain-label">{ d.label }</span>
                </div>
              </Card>
          }) }
        </div>
      </Section>
    }
}

#[function_component(InternshipsSection)]
fn internships_section() -> Html {
    let apply_href = mailto(COMPANY.email, Some(MailSubject::InternshipApplication));

    html! {
      <Section id="internships" title="Internships"
        subtitle="Hands-on, mentor-led internships for university students to gain real-world experience.">
        <div class="grid grid-3">
          <Card title="How internships work" class="span-2">
            <ul class="bullets">
              { for INTERNSHIP_POINTS.iter().map(|p| html! { <li key={*p}>{ *p }</li> }) }
              <li>{ internship_focus_line() }</li>
            </ul>
            <div class="callout">
              <p class="small">
                { "To apply, email us at " }
                <a href={apply_href.clone()}>{ COMPANY.email }</a>
                { " with your resume, GitHub/portfolio, and preferred start date." }
              </p>
            </div>
            <div class="cta-row">
              <a class="btn" href={apply_href}>
                <IconGlyph icon={Icon::Send} />{ " Apply via Email" }
              </a>
              <a class="btn btn-outline" href="#contact">{ "Contact & FAQs" }</a>
            </div>
          </Card>
          <Card title="Popular tracks">
            <div class="stack">
              { for COURSES.iter().map(|c| html! {
                  <div key={*c} class="row track-row">
                    <IconGlyph icon={Icon::GraduationCap} />
                    <span>{ *c }</span>
                  </div>
              }) }
            </div>
          </Card>
        </div>
      </Section>
    }
}

#[function_component(HiringSection)]
fn hiring_section() -> Html {
    html! {
      <Section id="jobs" title="We’re hiring" subtitle="Open to freshers and experienced professionals.">
        <div class="grid grid-2">
          <Card title="Open roles">
            <div class="stack">
              { for ROLES.iter().map(|role| html! {
                  <div key={*role} class="row role-row">
                    <span>{ *role }</span>
                    <a class="btn btn-sm" href={mailto(COMPANY.email, Some(MailSubject::RoleApplication(*role)))}>
                      { "Apply" }
                    </a>
                  </div>
              }) }
            </div>
          </Card>
          <Card title="What we look for">
            <ul class="bullets">
              { for HIRING_CRITERIA.iter().map(|c| html! { <li key={*c}>{ *c }</li> }) }
            </ul>
          </Card>
        </div>
      </Section>
    }
}

#[function_component(CoursesSection)]
fn courses_section() -> Html {
    html! {
      <Section id="courses" title="Courses & Upskilling"
        subtitle="Industry-aligned courses to prepare you for jobs and internships.">
        <div class="grid grid-3">
          { for COURSES.iter().map(|course| html! {
              <Card key={*course} title={AttrValue::from(*course)} class="course-card">
                <p class="small">{ "Project-based learning with mentorship, assignments, and capstone." }</p>
                <div class="cta-row">
                  <button type="button" class="btn btn-sm">{ "Syllabus" }</button>
                  <a class="btn btn-sm btn-outline" href={mailto(COMPANY.email, Some(MailSubject::CourseEnquiry(*course)))}>
                    { "Enquire" }
                  </a>
                </div>
              </Card>
          }) }
        </div>
      </Section>
    }
}

#[function_component(ProjectsSection)]
fn projects_section() -> Html {
    html! {
      <Section id="projects" title="Projects"
        subtitle="A peek into the kinds of projects our interns and teams build.">
        <div class="grid grid-3">
          { for PROJECT_AREAS.iter().map(|area| html! {
              <Card key={*area} title={AttrValue::from(*area)} class="project-card">
                <ul class="bullets small">
                  { for PROJECT_HIGHLIGHTS.iter().map(|h| html! { <li key={*h}>{ *h }</li> }) }
                </ul>
              </Card>
          }) }
        </div>
      </Section>
    }
}

/* -----------------------------
   Contact + quick message
----------------------------- */

#[function_component(ContactSection)]
fn contact_section() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(FormStatus::default);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let status = status.clone();

        Callback::from(move |e: SubmitEvent| {
            // The browser's required/type=email checks have already run.
            e.prevent_default();

            let draft = QuickMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            };
            let next = draft.submit();
            match &next {
                FormStatus::Acknowledged(_) => {
                    log!("quick message acknowledged for", draft.email.trim().to_string());
                }
                FormStatus::Rejected(reason) => {
                    warn!("quick message rejected:", reason.to_string());
                }
                FormStatus::Idle => {}
            }
            status.set(next);
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
      <Section id="contact" title="Contact us" subtitle="Have questions or want to collaborate? Reach out.">
        <div class="grid grid-2">
          <Card title="Get in touch">
            <div class="glance-row"><IconGlyph icon={Icon::Mail} /><a href={mailto(COMPANY.email, None)}>{ COMPANY.email }</a></div>
            <div class="glance-row"><IconGlyph icon={Icon::Phone} /><a href={tel(COMPANY.phone)}>{ COMPANY.phone }</a></div>
            <p class="small muted">
              { "Internship enquiries: email us with subject " }
              <strong>{ "“Internship Application”" }</strong>
              { "." }
            </p>
            <div class="cta-row">
              <a class="btn" href={mailto(COMPANY.email, Some(MailSubject::GeneralEnquiry))}>
                <IconGlyph icon={Icon::Mail} />{ " Email" }
              </a>
              <a class="btn btn-outline" href={tel(COMPANY.phone)}>
                <IconGlyph icon={Icon::Phone} />{ " Call" }
              </a>
            </div>
          </Card>
          <Card title="Quick message">
            <form class="quick-form" onsubmit={on_submit}>
              <input
                name="name"
                type="text"
                placeholder="Your name"
                required=true
                value={(*name).clone()}
                oninput={on_name}
              />
              <input
                name="email"
                type="email"
                placeholder="Your email"
                required=true
                value={(*email).clone()}
                oninput={on_email}
              />
              <textarea
                name="message"
                placeholder="Your message"
                rows="4"
                required=true
                value={(*message).clone()}
                oninput={on_message}
              />
              <button type="submit" class="btn btn-block">
                <IconGlyph icon={Icon::Send} />{ " Send" }
              </button>
            </form>
            <FormStatusLine status={(*status).clone()} />
            <p class="tiny muted">{ DEMO_NOTE }</p>
          </Card>
        </div>
      </Section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormStatusLineProps {
    pub status: FormStatus,
}

/// Acknowledgement or rejection under the quick-message form.
#[function_component(FormStatusLine)]
pub fn form_status_line(props: &FormStatusLineProps) -> Html {
    match &props.status {
        FormStatus::Idle => html! {},
        FormStatus::Acknowledged(text) => html! { <p class="ack" role="status">{ text.clone() }</p> },
        FormStatus::Rejected(reason) => html! { <p class="err" role="alert">{ reason.to_string() }</p> },
    }
}

/* -----------------------------
   Footer
----------------------------- */

#[derive(Properties, PartialEq)]
struct FooterProps {
    year: i32,
}

#[function_component(SiteFooter)]
fn site_footer(props: &FooterProps) -> Html {
    html! {
      <footer class="footer">
        <div class="container footer-row">
          <div>
            <div class="brand">
              <IconGlyph icon={Icon::Rocket} />
              <span>{ COMPANY.name }</span>
            </div>
            <p class="small muted copyright">
              { copyright_line(props.year) }
              { " Built with ♥ for learners and experts in Data Science." }
            </p>
          </div>
          <div class="footer-cols">
            <div>
              <div class="footer-head">{ "Explore" }</div>
              <ul>
                { for NAV_LINKS.iter().take(FOOTER_EXPLORE_LINKS).map(|n| html! {
                    <li key={n.anchor}><NavLink anchor={n.anchor} label={n.label} class="footer-link" /></li>
                }) }
              </ul>
            </div>
            <div>
              <div class="footer-head">{ "Learn" }</div>
              <ul>
                { for COURSES.iter().take(FOOTER_COURSES).map(|c| html! {
                    <li key={*c}><NavLink anchor="courses" label={*c} class="footer-link" /></li>
                }) }
              </ul>
            </div>
          </div>
        </div>
      </footer>
    }
}
