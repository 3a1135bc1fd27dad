//! Server-rendered HTML pages.
//!
//! Pages are plain strings assembled by render functions; every interpolated
//! user value goes through [`escape`]. Outcome messages travel in the
//! redirect's `flash` query parameter instead of per-request session state,
//! so rendering stays a pure function of its inputs.

pub mod products;
pub mod users;

use axum::response::Html;

/// Outcome message shown after a successful mutation.
///
/// The redirect carries the variant's code in its `flash` query parameter
/// and the target page maps it back to the message. Only these fixed codes
/// are recognized; arbitrary query values render nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    UserCreated,
    UserUpdated,
    UserDeleted,
}

impl Flash {
    pub fn code(self) -> &'static str {
        match self {
            Flash::ProductCreated => "produto_cadastrado",
            Flash::ProductUpdated => "produto_atualizado",
            Flash::ProductDeleted => "produto_excluido",
            Flash::UserCreated => "usuario_cadastrado",
            Flash::UserUpdated => "usuario_atualizado",
            Flash::UserDeleted => "usuario_excluido",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "produto_cadastrado" => Some(Flash::ProductCreated),
            "produto_atualizado" => Some(Flash::ProductUpdated),
            "produto_excluido" => Some(Flash::ProductDeleted),
            "usuario_cadastrado" => Some(Flash::UserCreated),
            "usuario_atualizado" => Some(Flash::UserUpdated),
            "usuario_excluido" => Some(Flash::UserDeleted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::ProductCreated => "Produto cadastrado com sucesso!",
            Flash::ProductUpdated => "Produto atualizado com sucesso!",
            Flash::ProductDeleted => "Produto excluído com sucesso!",
            Flash::UserCreated => "Usuário cadastrado com sucesso!",
            Flash::UserUpdated => "Usuário atualizado com sucesso!",
            Flash::UserDeleted => "Usuário excluído com sucesso!",
        }
    }
}

/// Escapes a value for interpolation into HTML text or attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wraps page content in the shared layout: title, navigation, and an
/// optional flash banner.
pub fn layout(title: &str, flash: Option<&str>, content: &str) -> Html<String> {
    let flash_banner = flash
        .map(|message| format!(r#"<div class="flash">{}</div>"#, escape(message)))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} - Sistema de Gerenciamento</title>
  <style>
    body {{ font-family: sans-serif; margin: 2rem auto; max-width: 60rem; padding: 0 1rem; }}
    nav a {{ margin-right: 1rem; }}
    table {{ border-collapse: collapse; width: 100%; }}
    th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
    .flash {{ background: #d4edda; border: 1px solid #c3e6cb; padding: 0.6rem; margin: 1rem 0; }}
    .errors {{ background: #f8d7da; border: 1px solid #f5c6cb; padding: 0.6rem; margin: 1rem 0; }}
    form label {{ display: block; margin-top: 0.8rem; }}
    form input, form textarea {{ width: 100%; max-width: 30rem; }}
    .actions {{ margin-top: 1rem; }}
  </style>
</head>
<body>
  <nav>
    <a href="/">Início</a>
    <a href="/produtos/">Produtos</a>
    <a href="/usuarios/">Usuários</a>
  </nav>
  {flash_banner}
  {content}
</body>
</html>"#,
        title = escape(title),
        flash_banner = flash_banner,
        content = content,
    ))
}

/// List of validation messages rendered above a re-displayed form.
pub fn error_list(errors: &[String]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let items: String = errors
        .iter()
        .map(|e| format!("<li>{}</li>", escape(e)))
        .collect();
    format!(r#"<div class="errors"><ul>{}</ul></div>"#, items)
}

/// Home page: entry links for both resources.
pub fn home() -> Html<String> {
    layout(
        "Início",
        None,
        r#"<h1>Sistema de Gerenciamento</h1>
  <ul>
    <li><a href="/produtos/">Gerenciar produtos</a></li>
    <li><a href="/usuarios/">Gerenciar usuários</a></li>
  </ul>"#,
    )
}
