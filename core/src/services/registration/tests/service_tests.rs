//! Unit tests for registration service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AccountKind, DraftField};
use crate::errors::{DomainError, SubmissionError};
use crate::services::registration::{
    RegistrationService, RegistrationServiceConfig, SubmissionOutcome,
};
use crate::wizard::{WizardEvent, WizardState, WizardStep};

use super::mocks::{valid_draft, wizard_at_terminal_step, MockRegistrationApi, MockServiceCatalog};

fn service(api: Arc<MockRegistrationApi>) -> RegistrationService<MockRegistrationApi, MockServiceCatalog> {
    RegistrationService::new(
        api,
        Arc::new(MockServiceCatalog::new(false)),
        RegistrationServiceConfig::default(),
    )
}

#[tokio::test]
async fn test_successful_registration_redirects_to_login() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));
    assert_eq!(state.step(), WizardStep::Address);

    let outcome = service.submit(&mut state).await.unwrap();

    match outcome {
        SubmissionOutcome::Registered { message, redirect } => {
            assert_eq!(message, "Cadastro realizado com sucesso");
            assert_eq!(redirect.location, "/login?userEmail=joao.pereira%40uez.com.br");
            assert_eq!(redirect.delay, Duration::from_secs(4));
        }
        other => panic!("Expected registration, got {:?}", other),
    }

    // Draft discarded after success
    assert_eq!(state.step(), WizardStep::Identity);
    assert!(state.draft().email.is_empty());
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_request_payload_for_client() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));

    service.submit(&mut state).await.unwrap();

    let request = api.last_request().unwrap();
    assert_eq!(request.username, "joao.pereira");
    assert_eq!(request.nome, "João Pereira");
    assert_eq!(request.cpf, "987.654.321-00");
    assert_eq!(request.cep, "20040-002");
    assert_eq!(request.telefone, "(21) 91234-5678");
    assert_eq!(request.usertype, AccountKind::Client);
    assert_eq!(request.id_servico, None);
}

#[tokio::test]
async fn test_rejected_registration_keeps_draft() {
    let api = Arc::new(MockRegistrationApi::replying("E-mail já cadastrado"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));
    let before = state.draft().clone();

    let outcome = service.submit(&mut state).await.unwrap();

    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected { message: "E-mail já cadastrado".to_string() }
    );
    assert_eq!(state.draft(), &before);
    assert_eq!(state.step(), WizardStep::Address);
    assert!(!state.is_submitting());
}

#[tokio::test]
async fn test_transport_failure_is_remote_error() {
    let api = Arc::new(MockRegistrationApi::failing("connection refused"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));

    let result = service.submit(&mut state).await;

    match result {
        Err(DomainError::Remote { message }) => assert_eq!(message, "connection refused"),
        other => panic!("Expected remote error, got {:?}", other),
    }
    assert!(!state.is_submitting());
    assert_eq!(state.draft().email, "joao.pereira@uez.com.br");
}

#[tokio::test]
async fn test_provider_without_service_never_calls_api() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut draft = valid_draft(AccountKind::Provider);
    draft.set(DraftField::ServiceId, "");
    let mut state = wizard_at_terminal_step(draft);
    assert_eq!(state.step(), WizardStep::ServiceCategory);

    let result = service.submit(&mut state).await;

    assert!(matches!(
        result,
        Err(DomainError::Submission(SubmissionError::MissingServiceCategory))
    ));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_provider_payload_carries_service_id() {
    let api = Arc::new(MockRegistrationApi::replying("Usuário cadastrado com sucesso"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Provider));

    let outcome = service.submit(&mut state).await.unwrap();

    assert!(outcome.is_registered());
    let request = api.last_request().unwrap();
    assert_eq!(request.usertype, AccountKind::Provider);
    assert_eq!(request.id_servico.as_deref(), Some("svc-eletricista"));
}

#[tokio::test]
async fn test_non_terminal_step_is_refused() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut state = WizardState::with_draft(valid_draft(AccountKind::Client), Default::default());

    let result = service.submit(&mut state).await;

    assert!(matches!(
        result,
        Err(DomainError::Submission(SubmissionError::NotTerminalStep { step: WizardStep::Identity }))
    ));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_invalid_draft_surfaces_field_errors() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));
    state.apply(WizardEvent::FieldChanged {
        field: DraftField::Email,
        value: String::new(),
    });

    let result = service.submit(&mut state).await;

    match result {
        Err(DomainError::Submission(SubmissionError::Invalid { errors })) => {
            assert_eq!(errors.first_for("email"), Some("O e-mail é obrigatório"));
        }
        other => panic!("Expected invalid draft, got {:?}", other),
    }
    assert_eq!(state.field_error(DraftField::Email), Some("O e-mail é obrigatório"));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_submission_in_flight_is_refused() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let service = service(api.clone());
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));
    state.apply(WizardEvent::SubmissionStarted);

    let result = service.submit(&mut state).await;

    assert!(matches!(
        result,
        Err(DomainError::Submission(SubmissionError::AlreadySubmitting))
    ));
    assert_eq!(api.request_count(), 0);
}

#[tokio::test]
async fn test_custom_success_marker() {
    let api = Arc::new(MockRegistrationApi::replying("Cadastro realizado com sucesso"));
    let config = RegistrationServiceConfig {
        success_marker: "OK".to_string(),
        ..RegistrationServiceConfig::default()
    };
    let service = RegistrationService::new(api, Arc::new(MockServiceCatalog::new(false)), config);
    let mut state = wizard_at_terminal_step(valid_draft(AccountKind::Client));

    let outcome = service.submit(&mut state).await.unwrap();

    assert!(!outcome.is_registered());
}

#[tokio::test]
async fn test_load_service_options() {
    let api = Arc::new(MockRegistrationApi::replying(""));
    let service = service(api);

    let services = service.load_service_options().await;
    assert_eq!(services.len(), 2);
    assert_eq!(services[0].id, "svc-eletricista");

    let failing = RegistrationService::new(
        Arc::new(MockRegistrationApi::replying("")),
        Arc::new(MockServiceCatalog::new(true)),
        RegistrationServiceConfig::default(),
    );
    assert!(failing.load_service_options().await.is_empty());
}
