//! HTML rendering
//!
//! Renders the login and browse pages as inline HTML, a thin functional
//! layer over the storage operations.

use axum::response::Html;

use crate::auth::Role;
use crate::storage::{Entry, Section};
use crate::storage::validation::join_virtual;

const STYLE: &str = "body{font-family:sans-serif;max-width:60em;margin:2em auto;padding:0 1em}\
table{border-collapse:collapse;width:100%}td,th{padding:.3em .6em;text-align:left}\
tr:nth-child(even){background:#f4f4f4}form.inline{display:inline}\
nav a{margin-right:1em}";

/// Renders the home page: section links, plus the login form when no
/// session is active.
pub fn render_index(role: Option<Role>) -> Html<String> {
    let mut body = String::new();
    body.push_str("<h1>Traction Vault</h1>\n");
    body.push_str(&render_session_bar(role));

    body.push_str("<h2>Sections</h2>\n<ul>\n");
    for section in Section::ALL {
        body.push_str(&format!(
            "<li><a href=\"/browse/{section}\">{section}</a></li>\n"
        ));
    }
    body.push_str("</ul>\n");

    if role.is_none() {
        body.push_str(
            "<h2>Connexion</h2>\n\
             <form method=\"post\" action=\"/\">\n\
             <select name=\"role\">\n\
             <option value=\"admin\">admin</option>\n\
             <option value=\"pro\">pro</option>\n\
             </select>\n\
             <input type=\"password\" name=\"password\" placeholder=\"Mot de passe\">\n\
             <button type=\"submit\">Se connecter</button>\n\
             </form>\n",
        );
    }

    Html(page("Traction Vault", &body))
}

/// Renders a directory listing with navigation and, for admins, the
/// mutation forms.
pub fn render_browse(
    role: Option<Role>,
    section: Section,
    path: &str,
    parent: &str,
    entries: &[Entry],
) -> Html<String> {
    let is_admin = role.is_some_and(|r| r.is_admin());
    let escaped_path = escape_html(path);

    let mut body = String::new();
    body.push_str(&format!("<h1>{section}/{escaped_path}</h1>\n"));
    body.push_str(&render_session_bar(role));

    body.push_str("<nav>\n<a href=\"/\">Accueil</a>\n");
    if !path.is_empty() {
        body.push_str(&format!(
            "<a href=\"{}\">Dossier parent</a>\n",
            escape_html(&browse_url(section, parent))
        ));
    }
    body.push_str(&format!(
        "<a href=\"{}\">T\u{e9}l\u{e9}charger (zip)</a>\n</nav>\n",
        escape_html(&zip_url(section, path))
    ));

    body.push_str("<table>\n<tr><th>Nom</th><th>Type</th>");
    if is_admin {
        body.push_str("<th></th>");
    }
    body.push_str("</tr>\n");

    for entry in entries {
        let escaped_name = escape_html(&entry.name);
        let child = join_virtual(path, &entry.name);
        let (href, kind) = if entry.is_dir {
            (browse_url(section, &child), "dossier")
        } else {
            (format!("/files/{}/{}", section, child), "fichier")
        };

        body.push_str(&format!(
            "<tr><td><a href=\"{}\">{}</a></td><td>{}</td>",
            escape_html(&href),
            escaped_name,
            kind
        ));
        if is_admin {
            body.push_str(&format!(
                "<td><form class=\"inline\" method=\"post\" action=\"/delete\">\
                 <input type=\"hidden\" name=\"section\" value=\"{section}\">\
                 <input type=\"hidden\" name=\"path\" value=\"{escaped_path}\">\
                 <input type=\"hidden\" name=\"name\" value=\"{escaped_name}\">\
                 <button type=\"submit\">Supprimer</button></form></td>"
            ));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</table>\n");

    if is_admin {
        body.push_str(&format!(
            "<h2>Nouveau dossier</h2>\n\
             <form method=\"post\" action=\"/create-folder\">\n\
             <input type=\"hidden\" name=\"section\" value=\"{section}\">\n\
             <input type=\"hidden\" name=\"path\" value=\"{escaped_path}\">\n\
             <input type=\"text\" name=\"name\" placeholder=\"Nom du dossier\">\n\
             <button type=\"submit\">Cr\u{e9}er</button>\n\
             </form>\n\
             <h2>T\u{e9}l\u{e9}verser un fichier</h2>\n\
             <form method=\"post\" action=\"/upload\" enctype=\"multipart/form-data\">\n\
             <input type=\"hidden\" name=\"section\" value=\"{section}\">\n\
             <input type=\"hidden\" name=\"path\" value=\"{escaped_path}\">\n\
             <input type=\"file\" name=\"file\">\n\
             <button type=\"submit\">Envoyer</button>\n\
             </form>\n\
             <h2>T\u{e9}l\u{e9}verser un dossier</h2>\n\
             <form method=\"post\" action=\"/upload-folder\" enctype=\"multipart/form-data\">\n\
             <input type=\"hidden\" name=\"section\" value=\"{section}\">\n\
             <input type=\"hidden\" name=\"path\" value=\"{escaped_path}\">\n\
             <input type=\"file\" name=\"files\" webkitdirectory multiple>\n\
             <button type=\"submit\">Envoyer</button>\n\
             </form>\n"
        ));
    }

    Html(page(&format!("{section}/{escaped_path}"), &body))
}

fn render_session_bar(role: Option<Role>) -> String {
    match role {
        Some(role) => format!(
            "<p>Connect\u{e9} : {} - <a href=\"/logout\">D\u{e9}connexion</a></p>\n",
            role
        ),
        None => "<p>Lecture seule - connectez-vous pour modifier.</p>\n".to_string(),
    }
}

fn browse_url(section: Section, path: &str) -> String {
    if path.is_empty() {
        format!("/browse/{}", section)
    } else {
        format!("/browse/{}/{}", section, path)
    }
}

fn zip_url(section: Section, path: &str) -> String {
    if path.is_empty() {
        format!("/download-zip/{}", section)
    } else {
        format!("/download-zip/{}/{}", section, path)
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
