//! Terraform directory detection E2E tests

mod helper;

use mockito::Server;

use helper::{MockRegistry, create_test_detector, create_test_dir};
use tf_version::config::ReleasesConfig;
use tf_version::detector::{DetectError, create_default_detector};
use tf_version::version::Version;
use tf_version::version::error::RegistryError;

const VERSIONS_TF: &str = r#"terraform {
  required_version = "~> 1.5.0"

  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = ">= 5.0"
    }
  }
}
"#;

const MAIN_TF: &str = r#"provider "aws" {
  region = "eu-west-1"
}

resource "aws_s3_bucket" "state" {
  bucket = "terraform-state"
}
"#;

#[tokio::test]
async fn selects_newest_release_within_pessimistic_constraint() {
    let dir = create_test_dir(&[("main.tf", MAIN_TF), ("versions.tf", VERSIONS_TF)]);
    let registry = MockRegistry::new().with_releases(
        "terraform",
        vec!["1.4.7", "1.5.0", "1.5.7", "1.6.0", "1.6.0-beta1", "1.5.8-rc1"],
    );

    let detection = create_test_detector(registry)
        .detect(dir.path())
        .await
        .unwrap();

    assert_eq!(detection.constraint.to_string(), "~> 1.5.0");
    assert_eq!(
        detection.matching,
        vec![Version::new(1, 5, 7), Version::new(1, 5, 0)]
    );
    assert_eq!(detection.selected(), Some(&Version::new(1, 5, 7)));
}

#[tokio::test]
async fn falls_back_to_latest_without_required_version() {
    let dir = create_test_dir(&[("main.tf", MAIN_TF)]);
    let registry =
        MockRegistry::new().with_releases("terraform", vec!["0.15.5", "1.9.8", "1.10.0"]);

    let detection = create_test_detector(registry)
        .detect(dir.path())
        .await
        .unwrap();

    assert!(detection.source.is_none());
    assert_eq!(detection.selected(), Some(&Version::new(1, 10, 0)));
}

#[tokio::test]
async fn reports_unknown_product() {
    let dir = create_test_dir(&[("versions.tf", VERSIONS_TF)]);

    let result = create_test_detector(MockRegistry::new())
        .detect(dir.path())
        .await;

    assert!(matches!(
        result,
        Err(DetectError::Registry(RegistryError::NotFound(_)))
    ));
}

#[tokio::test]
async fn default_detector_fetches_releases_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/terraform/index.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "name": "terraform",
                "versions": {
                    "1.0.0": {}, "1.2.0": {}, "1.2.9": {}, "1.3.0": {}, "2.0.0": {},
                    "1.3.0-alpha20220608": {}
                }
            }"#,
        )
        .create_async()
        .await;

    let dir = create_test_dir(&[(
        "versions.tf",
        "terraform {\n  required_version = \">= 1.2.0, < 2.0.0\"\n}\n",
    )]);
    let config = ReleasesConfig {
        base_url: server.url(),
        timeout: 5_000,
        ..ReleasesConfig::default()
    };

    let detection = create_default_detector(&config)
        .detect(dir.path())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        detection.matching,
        vec![
            Version::new(1, 3, 0),
            Version::new(1, 2, 9),
            Version::new(1, 2, 0)
        ]
    );
}
