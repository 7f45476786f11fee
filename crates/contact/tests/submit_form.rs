use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use showcase_contact::{Command, ContactForm, ContactSubmission, LogDelivery};
use showcase_shared::Error;

mod helpers;

const DELAY: Duration = Duration::from_millis(40);

#[tokio::test]
async fn test_submit_form_passes_fields_through() -> anyhow::Result<()> {
    let (command, delivery) = helpers::setup_command(DELAY);

    command.submit_form(helpers::ada().into()).await?;

    assert_eq!(
        delivery.delivered(),
        vec![ContactSubmission {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            email: "ada@example.com".to_owned(),
            telephone: "".to_owned(),
            nature_of_enquiry: "General".to_owned(),
            message: "Hello".to_owned(),
            join_community: true,
            consent: true,
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_submit_form_without_consent() -> anyhow::Result<()> {
    let (command, delivery) = helpers::setup_command(DELAY);

    command
        .submit_form(
            ContactForm {
                consent: None,
                ..helpers::ada()
            }
            .into(),
        )
        .await?;

    let delivered = delivery.delivered();
    assert_eq!(delivered.len(), 1);
    assert!(!delivered[0].consent);
    assert!(delivered[0].join_community);

    Ok(())
}

#[tokio::test]
async fn test_submit_form_with_empty_message() -> anyhow::Result<()> {
    let (command, delivery) = helpers::setup_command(DELAY);

    command
        .submit_form(
            ContactForm {
                message: "".to_owned(),
                join_community: Some("off".to_owned()),
                ..helpers::ada()
            }
            .into(),
        )
        .await?;

    let delivered = delivery.delivered();
    assert_eq!(delivered[0].message, "");
    assert!(!delivered[0].join_community);

    Ok(())
}

#[tokio::test]
async fn test_submit_form_waits_for_delay() -> anyhow::Result<()> {
    let (command, _) = helpers::setup_command(DELAY);

    let started = Instant::now();
    command.submit_form(helpers::ada().into()).await?;
    assert!(started.elapsed() >= DELAY);

    let started = Instant::now();
    let result = command.submit_form(ContactForm::default().into()).await;
    assert!(result.is_err());
    assert!(started.elapsed() >= DELAY);

    Ok(())
}

#[tokio::test]
async fn test_submit_form_rejects_missing_required_fields() {
    let (command, delivery) = helpers::setup_command(DELAY);

    let err = command
        .submit_form(
            ContactForm {
                first_name: "".to_owned(),
                email: "not-an-email".to_owned(),
                ..helpers::ada()
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(_)));

    let messages = err
        .field_messages()
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>();
    assert!(messages.contains(&"First name must be between 1 and 100 characters".to_owned()));
    assert!(messages.contains(&"A valid email address is required".to_owned()));
    assert!(!messages.contains(&"Last name must be between 1 and 100 characters".to_owned()));

    assert!(delivery.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_form_rejects_overlong_names() {
    let (command, delivery) = helpers::setup_command(DELAY);

    let err = command
        .submit_form(
            ContactForm {
                first_name: "a".repeat(101),
                last_name: "b".repeat(101),
                ..helpers::ada()
            }
            .into(),
        )
        .await
        .unwrap_err();

    assert_eq!(
        err.field_messages(),
        vec![
            (
                "first_name".to_owned(),
                "First name must be between 1 and 100 characters".to_owned()
            ),
            (
                "last_name".to_owned(),
                "Last name must be between 1 and 100 characters".to_owned()
            ),
        ]
    );
    assert!(delivery.delivered().is_empty());
}

#[tokio::test]
async fn test_submit_form_accepts_hundred_character_names() -> anyhow::Result<()> {
    let (command, delivery) = helpers::setup_command(Duration::ZERO);

    command
        .submit_form(
            ContactForm {
                first_name: "a".repeat(100),
                ..helpers::ada()
            }
            .into(),
        )
        .await?;

    assert_eq!(delivery.delivered().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_submit_form_reports_delivery_failure() {
    let command = Command::new(Arc::new(helpers::FailingDelivery), DELAY);

    let err = command
        .submit_form(helpers::ada().into())
        .await
        .unwrap_err();

    match err {
        Error::Delivery(reason) => assert!(reason.contains("mail server unreachable")),
        other => panic!("expected delivery error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_concurrent_submissions_are_independent() -> anyhow::Result<()> {
    let delay = Duration::from_millis(100);
    let (command, delivery) = helpers::setup_command(delay);

    let submissions = ["one", "two", "three", "four"].map(|name| ContactForm {
        first_name: name.to_owned(),
        ..helpers::ada()
    });

    let started = Instant::now();
    let results = futures::future::join_all(
        submissions
            .into_iter()
            .map(|form| command.submit_form(form.into())),
    )
    .await;

    for result in results {
        result?;
    }

    assert!(started.elapsed() < delay * 4);

    let mut names = delivery
        .delivered()
        .into_iter()
        .map(|s| s.first_name)
        .collect::<Vec<_>>();
    names.sort();
    assert_eq!(names, vec!["four", "one", "three", "two"]);

    Ok(())
}

#[tokio::test]
async fn test_log_delivery_always_succeeds() -> anyhow::Result<()> {
    let command = Command::new(Arc::new(LogDelivery), Duration::ZERO);

    command.submit_form(helpers::ada().into()).await?;
    command
        .submit_form(
            ContactForm {
                message: "<script>alert(1)</script>".to_owned(),
                ..helpers::ada()
            }
            .into(),
        )
        .await?;

    Ok(())
}
