//! Request bodies and response decoding shared by the endpoints

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uez_core::domain::Notification;
use uez_shared::types::MessageResponse;

use crate::InfrastructureError;

/// Body of `POST /notification`
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct NotificationBody<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub message: &'a str,
    pub to: &'a str,
}

impl<'a> From<&'a Notification> for NotificationBody<'a> {
    fn from(notification: &'a Notification) -> Self {
        Self {
            kind: &notification.kind,
            message: &notification.message,
            to: &notification.recipient_id,
        }
    }
}

/// Decode a success body
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, InfrastructureError> {
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

/// Decode a `{message}` body whatever the status.
///
/// The backend answers refusals such as a duplicate e-mail with an error
/// status and a readable message; those are returned as messages.
pub(crate) fn decode_message(status: StatusCode, body: &str) -> Result<MessageResponse, InfrastructureError> {
    match serde_json::from_str::<MessageResponse>(body) {
        Ok(response) => Ok(response),
        Err(_) if !status.is_success() => Err(status_error(status, body)),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn status_error(status: StatusCode, body: &str) -> InfrastructureError {
    InfrastructureError::Status {
        status: status.as_u16(),
        body: body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uez_shared::types::Chat;

    #[test]
    fn test_notification_body_wire_names() {
        let notification = Notification::service_request("64ab01");
        let json = serde_json::to_value(NotificationBody::from(&notification)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "solicitCliente",
                "message": "Cliente mandou mensagem para você!",
                "to": "64ab01"
            })
        );
    }

    #[test]
    fn test_server_message_survives_error_status() {
        let response = decode_message(StatusCode::CONFLICT, r#"{"message":"E-mail já cadastrado"}"#).unwrap();
        assert_eq!(response.message, "E-mail já cadastrado");

        let err = decode_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, InfrastructureError::Status { status: 502, .. }));

        let err = decode_message(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, InfrastructureError::Decode(_)));
    }

    #[test]
    fn test_decode_requires_success() {
        let chat: Chat = decode(StatusCode::CREATED, r#"{"_id":"c1"}"#).unwrap();
        assert_eq!(chat.id, "c1");

        let err = decode::<Chat>(StatusCode::UNAUTHORIZED, r#"{"message":"Token inválido"}"#).unwrap_err();
        assert_eq!(err.to_string(), r#"HTTP 401: {"message":"Token inválido"}"#);
    }
}
