//! HTTP route handlers.

pub mod health;
pub mod home;
pub mod produtos;
pub mod produtos_api;
pub mod usuarios;

use serde::Deserialize;

use crate::views::Flash;

/// `flash` query parameter carried by post-mutation redirects.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    flash: Option<String>,
}

impl FlashQuery {
    /// The flash message to display, if the code is one we recognize.
    pub fn message(&self) -> Option<&'static str> {
        self.flash
            .as_deref()
            .and_then(Flash::from_code)
            .map(Flash::message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_query_maps_known_code() {
        let query = FlashQuery {
            flash: Some("produto_cadastrado".into()),
        };
        assert_eq!(query.message(), Some("Produto cadastrado com sucesso!"));
    }

    #[test]
    fn test_flash_query_ignores_unknown_code() {
        let query = FlashQuery {
            flash: Some("alert('x')".into()),
        };
        assert_eq!(query.message(), None);
        assert_eq!(FlashQuery::default().message(), None);
    }
}
