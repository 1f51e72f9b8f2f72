//! Acceptance rules a draft must pass before any request is issued.
//!
//! Pure: no network, no storage. Violations are reported per field path so the
//! form can attach them to the offending input (`items[2].price`).

use chrono::NaiveDate;

use super::aggregate::OrderDraft;

/// A single violated rule, addressed by field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Checks every rule and aggregates all violations instead of stopping at the
/// first one.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.number.trim().is_empty() {
        errors.push(FieldError::new("number", "Número do pedido é obrigatório"));
    }
    if draft.client_name.chars().count() < 3 {
        errors.push(FieldError::new(
            "clientName",
            "Nome deve ter pelo menos 3 caracteres",
        ));
    }
    if draft.client_document.chars().count() < 11 {
        errors.push(FieldError::new("clientDocument", "CPF/CNPJ inválido"));
    }
    if draft.delivery_address.chars().count() < 10 {
        errors.push(FieldError::new("deliveryAddress", "Endereço muito curto"));
    }
    match draft.expected_delivery_date.trim() {
        "" => errors.push(FieldError::new(
            "expectedDeliveryDate",
            "Data de entrega é obrigatória",
        )),
        date => {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                errors.push(FieldError::new(
                    "expectedDeliveryDate",
                    "Data de entrega inválida",
                ));
            }
        }
    }
    // `draft.status` is a typed enum; membership in the fixed set holds by
    // construction.

    if draft.items.is_empty() {
        errors.push(FieldError::new("items", "Adicione pelo menos um item"));
    }
    for (index, item) in draft.items.iter().enumerate() {
        if item.description.trim().is_empty() {
            errors.push(FieldError::new(
                format!("items[{index}].description"),
                "Descrição obrigatória",
            ));
        }
        if item.price < 0.01 {
            errors.push(FieldError::new(
                format!("items[{index}].price"),
                "Preço deve ser maior que 0",
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orders::aggregate::{ItemDraft, OrderDraft};

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            number: "P-1234".to_string(),
            client_name: "Ana Silva".to_string(),
            client_document: "12345678901".to_string(),
            delivery_address: "Rua X, 100, Bairro Y".to_string(),
            expected_delivery_date: "2025-01-10".to_string(),
            status: Default::default(),
            items: vec![ItemDraft {
                description: "Bolo".to_string(),
                price: 50.0,
            }],
        }
    }

    fn paths(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn accepts_valid_draft() {
        assert!(validate_draft(&valid_draft()).is_ok());
    }

    #[test]
    fn empty_items_fail_with_items_violation() {
        let mut draft = valid_draft();
        draft.items.clear();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(paths(&errors), vec!["items"]);
    }

    #[test]
    fn item_price_boundary_at_one_cent() {
        let mut draft = valid_draft();
        draft.items[0].price = 0.0;
        assert!(validate_draft(&draft).is_err());

        draft.items[0].price = -5.0;
        assert!(validate_draft(&draft).is_err());

        draft.items[0].price = 0.01;
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn item_errors_carry_indexed_paths() {
        let mut draft = valid_draft();
        draft.items.push(ItemDraft {
            description: String::new(),
            price: 0.0,
        });
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(paths(&errors), vec!["items[1].description", "items[1].price"]);
    }

    #[test]
    fn client_document_boundary_at_eleven_chars() {
        let mut draft = valid_draft();
        draft.client_document = "1234567890".to_string();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(paths(&errors), vec!["clientDocument"]);

        draft.client_document = "12345678901".to_string();
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn client_name_requires_three_chars() {
        let mut draft = valid_draft();
        draft.client_name = "Al".to_string();
        assert!(validate_draft(&draft).is_err());

        // Counted in characters, not bytes.
        draft.client_name = "Zoé".to_string();
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn delivery_address_requires_ten_chars() {
        let mut draft = valid_draft();
        draft.delivery_address = "Rua X, 10".to_string();
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn delivery_date_must_parse() {
        let mut draft = valid_draft();
        draft.expected_delivery_date = String::new();
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(errors[0].message, "Data de entrega é obrigatória");

        draft.expected_delivery_date = "10/01/2025".to_string();
        assert!(validate_draft(&draft).is_err());
    }

    #[test]
    fn violations_aggregate_across_fields() {
        let draft = OrderDraft::new("".to_string(), "".to_string());
        let errors = validate_draft(&draft).unwrap_err();
        let collected = paths(&errors);
        for expected in [
            "number",
            "clientName",
            "clientDocument",
            "deliveryAddress",
            "expectedDeliveryDate",
            "items[0].description",
            "items[0].price",
        ] {
            assert!(collected.contains(&expected), "missing {expected}");
        }
    }
}
