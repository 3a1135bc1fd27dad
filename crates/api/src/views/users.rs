//! User pages.
//!
//! Password fields are never echoed back, not even after a validation
//! failure; the user retypes them.

use axum::response::Html;
use domain::models::{User, UserInput};

use super::{error_list, escape, layout};

pub fn list(users: &[User], flash: Option<&str>) -> Html<String> {
    let rows: String = users
        .iter()
        .map(|u| {
            format!(
                r#"<tr>
      <td><a href="/usuarios/{id}">{name}</a></td>
      <td>{email}</td>
      <td>
        <a href="/usuarios/{id}/editar">Editar</a>
        <form method="post" action="/usuarios/{id}/deletar" style="display:inline">
          <button type="submit">Excluir</button>
        </form>
      </td>
    </tr>"#,
                id = u.id,
                name = escape(&u.name),
                email = escape(&u.email),
            )
        })
        .collect();

    let table = if users.is_empty() {
        "<p>Nenhum usuário cadastrado.</p>".to_string()
    } else {
        format!(
            r#"<table>
    <tr><th>Nome</th><th>E-mail</th><th>Ações</th></tr>
    {rows}
  </table>"#
        )
    };

    let content = format!(
        r#"<h1>Usuários</h1>
  <p><a href="/usuarios/cadastrar">Cadastrar novo usuário</a></p>
  {table}"#
    );

    layout("Usuários", flash, &content)
}

pub fn detail(user: &User, flash: Option<&str>) -> Html<String> {
    let content = format!(
        r#"<h1>{name}</h1>
  <p><strong>E-mail:</strong> {email}</p>
  <div class="actions">
    <a href="/usuarios/{id}/editar">Editar</a>
    <a href="/usuarios/">Voltar</a>
  </div>"#,
        name = escape(&user.name),
        email = escape(&user.email),
        id = user.id,
    );

    layout(&user.name, flash, &content)
}

fn form_fields(input: Option<&UserInput>, password_hint: &str) -> String {
    let (name, email) = match input {
        Some(i) => (escape(&i.name), escape(&i.email)),
        None => (String::new(), String::new()),
    };

    format!(
        r#"<label>Nome
      <input type="text" name="nome" value="{name}" required>
    </label>
    <label>E-mail
      <input type="email" name="email" value="{email}" required>
    </label>
    <label>Senha {hint}
      <input type="password" name="senha">
    </label>"#,
        name = name,
        email = email,
        hint = password_hint,
    )
}

pub fn create_form(errors: &[String], input: Option<&UserInput>) -> Html<String> {
    let content = format!(
        r#"<h1>Cadastrar Usuário</h1>
  {errors}
  <form method="post" action="/usuarios/cadastrar">
    {fields}
    <div class="actions">
      <button type="submit">Cadastrar</button>
      <a href="/usuarios/">Cancelar</a>
    </div>
  </form>"#,
        errors = error_list(errors),
        fields = form_fields(input, ""),
    );

    layout("Cadastrar Usuário", None, &content)
}

pub fn edit_form(id: i64, errors: &[String], input: &UserInput) -> Html<String> {
    let content = format!(
        r#"<h1>Editar Usuário</h1>
  {errors}
  <form method="post" action="/usuarios/{id}/editar">
    {fields}
    <div class="actions">
      <button type="submit">Salvar</button>
      <a href="/usuarios/{id}">Cancelar</a>
    </div>
  </form>"#,
        errors = error_list(errors),
        fields = form_fields(Some(input), "(deixe em branco para manter a atual)"),
        id = id,
    );

    layout("Editar Usuário", None, &content)
}
