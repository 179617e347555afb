//! Standard page markup on a `MemorySurface`, shared by component tests.

use crate::surface::memory::{MemorySurface, NodeId};

pub(crate) struct TestPage {
    pub surface: MemorySurface,
    pub header: NodeId,
    pub hamburger: NodeId,
    pub hamburger_bar: NodeId,
    pub menu_panel: NodeId,
    pub menu_link: NodeId,
    pub theme_toggle: NodeId,
    pub theme_icon: NodeId,
    pub projects: [NodeId; 2],
    pub previews: [NodeId; 2],
    pub about: NodeId,
    pub about_link: NodeId,
    pub bare_link: NodeId,
    pub form: NodeId,
    pub name: NodeId,
    pub email: NodeId,
    pub message: NodeId,
    pub name_error: NodeId,
    pub email_error: NodeId,
    pub message_error: NodeId,
    pub submit: NodeId,
    pub status: NodeId,
    pub year: NodeId,
    pub outside: NodeId,
}

impl TestPage {
    pub fn new() -> Self {
        let s = MemorySurface::new();
        let body = s.body_id();

        let header = s.append(body, "header").class("header").top(0.0).build();
        let hamburger = s.append(header, "button").id("hamburger-menu").build();
        let hamburger_bar = s.append(hamburger, "span").class("hamburger__bar").build();
        let menu_panel = s.append(header, "nav").class("header__menu-mobile").build();
        let menu_link = s.append(menu_panel, "a").attr("href", "#about").text("About").build();
        let theme_toggle = s.append(header, "button").id("theme-toggle").build();
        let theme_icon = s.append(theme_toggle, "i").class("fas").build();

        let main = s.append(body, "main").build();
        let about = s.append(main, "section").id("about").top(900.0).build();
        let about_link = s.append(main, "a").attr("href", "#about").build();
        let bare_link = s.append(main, "a").attr("href", "#").build();

        let list = s.append(main, "ul").build();
        let p1 = s.append(list, "li").class("project-list-item").attr("data-project", "alpha").build();
        let p2 = s.append(list, "li").class("project-list-item").attr("data-project", "beta").build();
        let v1 = s.append(main, "div").class("project-preview").id("alpha").build();
        let v2 = s.append(main, "div").class("project-preview").id("beta").build();

        let form = s.append(main, "form").id("contact-form").build();
        let name = s.append(form, "input").id("contact-name").build();
        let name_error = s.append(form, "span").id("name-error").build();
        let email = s.append(form, "input").id("contact-email").build();
        let email_error = s.append(form, "span").id("email-error").build();
        let message = s.append(form, "textarea").id("contact-message").build();
        let message_error = s.append(form, "span").id("message-error").build();
        let submit = s.append(form, "button").attr("type", "submit").text("Send Message").build();
        let status = s.append(form, "p").id("form-status").build();

        let footer = s.append(body, "footer").build();
        let year = s.append(footer, "span").id("current-year").build();
        let outside = s.append(footer, "p").text("elsewhere").build();

        Self {
            surface: s,
            header,
            hamburger,
            hamburger_bar,
            menu_panel,
            menu_link,
            theme_toggle,
            theme_icon,
            projects: [p1, p2],
            previews: [v1, v2],
            about,
            about_link,
            bare_link,
            form,
            name,
            email,
            message,
            name_error,
            email_error,
            message_error,
            submit,
            status,
            year,
            outside,
        }
    }
}
