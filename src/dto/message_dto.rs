use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Formulario de contacto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[serde(alias = "nombre")]
    #[validate(length(max = 120), custom = "validate_not_empty")]
    pub name: String,
    #[validate(email(message = "Email inválido"))]
    pub email: String,
    #[serde(default, alias = "telefono")]
    #[validate(length(max = 40, message = "Teléfono demasiado largo"))]
    pub phone: String,
    #[serde(alias = "mensaje")]
    #[validate(length(max = 2000), custom = "validate_not_empty")]
    pub body: String,
}

// Filtros del listado de mensajes
#[derive(Debug, Default, Deserialize)]
pub struct MessageFilters {
    #[serde(default, alias = "no_leidos")]
    pub unread_only: bool,
}

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    #[serde(default = "default_read", alias = "leido")]
    pub read: bool,
}

fn default_read() -> bool {
    true
}
