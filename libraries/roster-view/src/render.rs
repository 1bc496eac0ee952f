//! HTML rendering
//!
//! Rendering is a pure function of view state. Form actions post to the
//! routes listed in [`routes`], which the host maps back to [`crate::Action`]s.

use crate::form::FormField;
use crate::view::UserListView;
use roster_core::User;
use std::fmt::{self, Write};

/// Paths the rendered forms post to.
pub mod routes {
    use roster_core::UserId;

    pub const SUBMIT: &str = "/submit";
    pub const CANCEL: &str = "/cancel";

    pub fn edit(id: UserId) -> String {
        format!("/users/{}/edit", id)
    }

    pub fn delete(id: UserId) -> String {
        format!("/users/{}/delete", id)
    }
}

const TITLE: &str = "User List";
const BLURB: &str = "JSONPlaceholder is a free online REST API that you can use whenever you need some fake data.";
const COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Username", "Website", "Actions"];

/// HTML-escaped text.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// The view rendered as an HTML fragment.
pub struct UserListHtml<'a> {
    view: &'a UserListView,
}

impl<'a> UserListHtml<'a> {
    pub fn new(view: &'a UserListView) -> Self {
        Self { view }
    }

    fn form(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.view.form();
        let editing = self.view.editing();

        writeln!(
            f,
            r#"<form class="user-form" method="post" action="{}">"#,
            routes::SUBMIT
        )?;
        for field in FormField::ALL {
            writeln!(
                f,
                r#"<input type="text" name="{key}" placeholder="{label}" value="{value}"{required}>"#,
                key = field.key(),
                label = field.label(),
                value = Escaped(form.get(field)),
                required = if field.required() { " required" } else { "" },
            )?;
        }
        let label = if editing.is_some() { "Update User" } else { "Add User" };
        writeln!(f, r#"<button type="submit">{}</button>"#, label)?;
        writeln!(f, "</form>")?;

        if let Some(target) = editing {
            writeln!(
                f,
                r#"<form class="cancel-edit" method="post" action="{}" data-editing="{}"><button type="submit">Cancel</button></form>"#,
                routes::CANCEL,
                target.id
            )?;
        }
        Ok(())
    }

    fn row(f: &mut fmt::Formatter<'_>, user: &User) -> fmt::Result {
        write!(f, r#"<tr data-id="{}""#, user.id)?;
        if user.is_new {
            f.write_str(r#" class="local-only""#)?;
        }
        f.write_str(">")?;
        write!(f, "<td>{}</td>", user.id)?;
        for value in [
            &user.fields.name,
            &user.fields.email,
            &user.fields.username,
            &user.fields.website,
        ] {
            write!(f, "<td>{}</td>", Escaped(value))?;
        }
        write!(
            f,
            "<td>{}{}</td>",
            ActionButton::new(routes::edit(user.id), "Edit"),
            ActionButton::new(routes::delete(user.id), "Delete")
        )?;
        writeln!(f, "</tr>")
    }

    fn table(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, r#"<table class="user-table">"#)?;
        f.write_str("<thead><tr>")?;
        for column in COLUMNS {
            write!(f, "<th>{}</th>", column)?;
        }
        writeln!(f, "</tr></thead>")?;
        writeln!(f, "<tbody>")?;
        for user in self.view.users() {
            Self::row(f, user)?;
        }
        writeln!(f, "</tbody>")?;
        writeln!(f, "</table>")
    }
}

impl fmt::Display for UserListHtml<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.view.is_loading() {
            return writeln!(f, r#"<div class="loading">Loading...</div>"#);
        }

        writeln!(f, r#"<div class="user-list">"#)?;
        writeln!(f, "<h1>{}</h1>", TITLE)?;
        writeln!(f, "<p>{}</p>", BLURB)?;
        self.form(f)?;
        self.table(f)?;
        writeln!(f, "</div>")
    }
}

struct ActionButton<'a> {
    action: String,
    label: &'a str,
}

impl<'a> ActionButton<'a> {
    fn new(action: String, label: &'a str) -> Self {
        Self { action, label }
    }
}

impl fmt::Display for ActionButton<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<form class="row-action" method="post" action="{}"><button type="submit">{}</button></form>"#,
            self.action, self.label
        )
    }
}
