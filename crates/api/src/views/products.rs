//! Product pages.

use axum::response::Html;
use domain::models::{Product, ProductInput};

use super::{error_list, escape, layout};

pub fn list(products: &[Product], flash: Option<&str>) -> Html<String> {
    let rows: String = products
        .iter()
        .map(|p| {
            format!(
                r#"<tr>
      <td><a href="/produtos/{id}">{name}</a></td>
      <td>R$ {price}</td>
      <td>{stock}</td>
      <td>
        <a href="/produtos/{id}/editar">Editar</a>
        <form method="post" action="/produtos/{id}/deletar" style="display:inline">
          <button type="submit">Excluir</button>
        </form>
      </td>
    </tr>"#,
                id = p.id,
                name = escape(&p.name),
                price = p.price,
                stock = p.stock,
            )
        })
        .collect();

    let table = if products.is_empty() {
        "<p>Nenhum produto cadastrado.</p>".to_string()
    } else {
        format!(
            r#"<table>
    <tr><th>Nome</th><th>Preço</th><th>Estoque</th><th>Ações</th></tr>
    {rows}
  </table>"#
        )
    };

    let content = format!(
        r#"<h1>Produtos</h1>
  <p><a href="/produtos/cadastrar">Cadastrar novo produto</a></p>
  {table}"#
    );

    layout("Produtos", flash, &content)
}

pub fn detail(product: &Product, flash: Option<&str>) -> Html<String> {
    let description = product
        .description
        .as_deref()
        .map(escape)
        .unwrap_or_else(|| "-".to_string());

    let content = format!(
        r#"<h1>{name}</h1>
  <p><strong>Descrição:</strong> {description}</p>
  <p><strong>Preço:</strong> R$ {price}</p>
  <p><strong>Estoque:</strong> {stock}</p>
  <p><strong>Criado em:</strong> {created}</p>
  <p><strong>Atualizado em:</strong> {updated}</p>
  <div class="actions">
    <a href="/produtos/{id}/editar">Editar</a>
    <a href="/produtos/">Voltar</a>
  </div>"#,
        name = escape(&product.name),
        description = description,
        price = product.price,
        stock = product.stock,
        created = product.created_at.format("%d/%m/%Y %H:%M"),
        updated = product.updated_at.format("%d/%m/%Y %H:%M"),
        id = product.id,
    );

    layout(&product.name, flash, &content)
}

fn form_fields(input: Option<&ProductInput>) -> String {
    let (name, description, price, stock) = match input {
        Some(i) => (
            escape(&i.name),
            i.description.as_deref().map(escape).unwrap_or_default(),
            i.price.to_string(),
            i.stock.to_string(),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };

    format!(
        r#"<label>Nome
      <input type="text" name="nome" value="{name}" required>
    </label>
    <label>Descrição
      <textarea name="descricao">{description}</textarea>
    </label>
    <label>Preço
      <input type="number" name="preco" value="{price}" step="0.01" required>
    </label>
    <label>Estoque
      <input type="number" name="estoque" value="{stock}" required>
    </label>"#
    )
}

pub fn create_form(errors: &[String], input: Option<&ProductInput>) -> Html<String> {
    let content = format!(
        r#"<h1>Cadastrar Produto</h1>
  {errors}
  <form method="post" action="/produtos/cadastrar">
    {fields}
    <div class="actions">
      <button type="submit">Cadastrar</button>
      <a href="/produtos/">Cancelar</a>
    </div>
  </form>"#,
        errors = error_list(errors),
        fields = form_fields(input),
    );

    layout("Cadastrar Produto", None, &content)
}

pub fn edit_form(id: i64, errors: &[String], input: &ProductInput) -> Html<String> {
    let content = format!(
        r#"<h1>Editar Produto</h1>
  {errors}
  <form method="post" action="/produtos/{id}/editar">
    {fields}
    <div class="actions">
      <button type="submit">Salvar</button>
      <a href="/produtos/{id}">Cancelar</a>
    </div>
  </form>"#,
        errors = error_list(errors),
        fields = form_fields(Some(input)),
        id = id,
    );

    layout("Editar Produto", None, &content)
}
