// storefront/src/web/render.rs

//! Turns a named template plus its context map into a response.
//!
//! Pages are answered as HTML unless the client asks for
//! `application/json`, in which case the context is returned as-is.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt::Write as _;

use crate::errors::{AppError, Result};

pub const HOME_TEMPLATE: &str = "home.html";
pub const PRODUCTS_TEMPLATE: &str = "products.html";

/// A template name together with the key/value context it is rendered with.
#[derive(Debug, Clone)]
pub struct Page {
  pub template: &'static str,
  pub context: Map<String, Value>,
}

impl Page {
  pub fn new<C: Serialize>(template: &'static str, context: &C) -> Result<Self> {
    match serde_json::to_value(context)? {
      Value::Object(context) => Ok(Self { template, context }),
      other => Err(AppError::Internal(format!(
        "context for '{}' must serialize to a map, got {}",
        template, other
      ))),
    }
  }

  fn text(&self, key: &str) -> &str {
    self.context.get(key).and_then(Value::as_str).unwrap_or_default()
  }
}

pub fn wants_json(req: &HttpRequest) -> bool {
  req
    .headers()
    .get(header::ACCEPT)
    .and_then(|v| v.to_str().ok())
    .map(|accept| accept.contains("application/json"))
    .unwrap_or(false)
}

pub fn respond(req: &HttpRequest, page: &Page, site_name: &str) -> Result<HttpResponse> {
  if wants_json(req) {
    return Ok(HttpResponse::Ok().json(json!({
      "template": page.template,
      "context": page.context,
    })));
  }
  let body = render_html(page, site_name)?;
  Ok(HttpResponse::Ok().content_type(ContentType::html()).body(body))
}

pub fn render_html(page: &Page, site_name: &str) -> Result<String> {
  let main = match page.template {
    HOME_TEMPLATE => home_body(site_name),
    PRODUCTS_TEMPLATE => products_body(page),
    other => return Err(AppError::TemplateNotFound(other.to_string())),
  };

  let mut html = String::new();
  html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
  let _ = writeln!(html, "<title>{}</title>", escape_html(page.text("page_title")));
  let _ = writeln!(
    html,
    "<meta name=\"description\" content=\"{}\">",
    escape_html(page.text("meta_description"))
  );
  html.push_str("</head>\n<body>\n");
  let _ = writeln!(
    html,
    "<header><a href=\"/\">{0}</a> <nav><a href=\"/\">Home</a> <a href=\"/products\">Products</a></nav></header>",
    escape_html(site_name)
  );
  html.push_str(&main);
  let _ = writeln!(html, "<footer>&copy; {}</footer>", escape_html(site_name));
  html.push_str("</body>\n</html>\n");
  Ok(html)
}

fn home_body(site_name: &str) -> String {
  format!(
    "<main class=\"home\">\n<h1>Welcome to {0}</h1>\n<p><a class=\"cta\" href=\"/products\">Shop the collection</a></p>\n</main>\n",
    escape_html(site_name)
  )
}

fn products_body(page: &Page) -> String {
  let products = page.context.get("products").and_then(Value::as_array);
  let mut out = String::from("<main class=\"products\">\n<ul class=\"product-grid\">\n");
  for product in products.into_iter().flatten() {
    out.push_str(&product_card(product));
  }
  out.push_str("</ul>\n</main>\n");
  out
}

fn product_card(product: &Value) -> String {
  let text = |key: &str| escape_html(product.get(key).and_then(Value::as_str).unwrap_or_default());
  let number = |key: &str| product.get(key).and_then(Value::as_u64);

  let mut card = String::new();
  let _ = write!(
    card,
    "<li class=\"product\" data-id=\"{}\" data-category=\"{}\" data-color=\"{}\" data-image=\"{}\">",
    number("id").unwrap_or_default(),
    text("category"),
    text("color"),
    text("image")
  );
  if let Some(badge) = product.get("badge").and_then(Value::as_str) {
    let _ = write!(card, "<span class=\"badge\">{}</span>", escape_html(badge));
  }
  let _ = write!(
    card,
    "<h2>{}</h2><p class=\"brand\">{}</p>",
    text("name"),
    text("brand")
  );
  let _ = write!(card, "<p class=\"price\">${}", number("price").unwrap_or_default());
  if let Some(original) = number("original_price") {
    let _ = write!(card, " <del>${}</del>", original);
  }
  card.push_str("</p>");

  let rating = number("rating").unwrap_or_default().min(5) as usize;
  let _ = write!(
    card,
    "<p class=\"rating\">{}{} ({})</p>",
    "&#9733;".repeat(rating),
    "&#9734;".repeat(5 - rating),
    number("rating_count").unwrap_or_default()
  );

  let sizes: Vec<&str> = product
    .get("sizes")
    .and_then(Value::as_array)
    .map(|sizes| sizes.iter().filter_map(Value::as_str).collect())
    .unwrap_or_default();
  let _ = writeln!(card, "<p class=\"sizes\">{}</p></li>", escape_html(&sizes.join(" ")));
  card
}

fn escape_html(raw: &str) -> String {
  let mut escaped = String::with_capacity(raw.len());
  for c in raw.chars() {
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
