//! Cargo manifests for the generated package.
//!
//! The generated package is a workspace with one client crate and one model
//! crate per service, plus the hand-maintained runtime crates every client
//! depends on:
//!
//! ```text
//! Cargo.toml                  # workspace manifest
//! aws-client-core/            # credentials and regions (not generated)
//! aws-client-http/            # signed HTTP dispatch (not generated)
//! simple-queue-client/
//! ├── Cargo.toml
//! └── src/lib.rs
//! simple-queue-model/
//! ├── Cargo.toml
//! └── src/{lib.rs,errors.rs}
//! ```

use awsgen_define::AsyncResultType;
use awsgen_define::naming::to_kebab_case;

/// Runtime crates shared by every generated client.
pub const RUNTIME_CRATES: [&str; 2] = ["aws-client-core", "aws-client-http"];

/// Directory and package name of a service's client crate.
pub fn client_crate_name(base_name: &str) -> String {
    format!("{}-client", to_kebab_case(base_name))
}

/// Directory and package name of a service's model crate.
pub fn model_crate_name(base_name: &str) -> String {
    format!("{}-model", to_kebab_case(base_name))
}

/// Generates the workspace manifest.
///
/// Members are listed per service in base-name order, client before model,
/// followed by the runtime crates.
pub fn generate_workspace_manifest(base_names: &[&str]) -> String {
    let mut sorted = base_names.to_vec();
    sorted.sort_unstable();

    let mut members = String::new();
    for base_name in sorted {
        members.push_str(&format!("    \"{}\",\n", client_crate_name(base_name)));
        members.push_str(&format!("    \"{}\",\n", model_crate_name(base_name)));
    }
    for runtime in RUNTIME_CRATES {
        members.push_str(&format!("    \"{runtime}\",\n"));
    }

    format!(
        r#"[workspace]
resolver = "2"
members = [
{members}]

[workspace.package]
version = "0.1.0"
edition = "2024"
license = "Apache-2.0"

[workspace.dependencies]
aws-client-core = {{ path = "aws-client-core" }}
aws-client-http = {{ path = "aws-client-http" }}
futures = "0.3"
http = "1.1"
serde = {{ version = "1.0", features = ["derive"] }}
"#
    )
}

/// Generates the manifest of a service's model crate.
pub fn generate_model_manifest(base_name: &str) -> String {
    format!(
        r#"[package]
name = "{name}"
version.workspace = true
edition.workspace = true
license.workspace = true
description = "Model types for the {base_name} service"

[dependencies]
serde = {{ workspace = true }}
"#,
        name = model_crate_name(base_name)
    )
}

/// Generates the manifest of a service's client crate.
pub fn generate_client_manifest(base_name: &str, async_result_type: AsyncResultType) -> String {
    let model = model_crate_name(base_name);
    let futures = match async_result_type {
        AsyncResultType::BoxFuture => "futures = { workspace = true }\n",
        AsyncResultType::Native => "",
    };

    format!(
        r#"[package]
name = "{name}"
version.workspace = true
edition.workspace = true
license.workspace = true
description = "AWS client for the {base_name} service"

[dependencies]
aws-client-core = {{ workspace = true }}
aws-client-http = {{ workspace = true }}
{futures}http = {{ workspace = true }}
{model} = {{ path = "../{model}" }}
"#,
        name = client_crate_name(base_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_names_are_kebab_case() {
        assert_eq!(client_crate_name("SimpleQueue"), "simple-queue-client");
        assert_eq!(model_crate_name("ElasticComputeCloud"), "elastic-compute-cloud-model");
    }

    #[test]
    fn workspace_members_are_sorted_by_base_name() {
        let manifest = generate_workspace_manifest(&["SimpleQueue", "S3", "DynamoDB"]);
        let parsed: toml::Value = toml::from_str(&manifest).unwrap();
        let members: Vec<&str> = parsed["workspace"]["members"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|m| m.as_str())
            .collect();

        assert_eq!(
            members,
            vec![
                "dynamo-db-client",
                "dynamo-db-model",
                "s3-client",
                "s3-model",
                "simple-queue-client",
                "simple-queue-model",
                "aws-client-core",
                "aws-client-http",
            ]
        );
    }

    #[test]
    fn model_manifest_depends_on_serde_only() {
        let parsed: toml::Value = toml::from_str(&generate_model_manifest("SimpleQueue")).unwrap();
        let deps = parsed["dependencies"].as_table().unwrap();

        assert_eq!(parsed["package"]["name"].as_str(), Some("simple-queue-model"));
        assert_eq!(deps.keys().collect::<Vec<_>>(), vec!["serde"]);
    }

    #[test]
    fn client_manifest_depends_on_model_and_runtime() {
        let manifest = generate_client_manifest("SimpleQueue", AsyncResultType::Native);
        let parsed: toml::Value = toml::from_str(&manifest).unwrap();
        let deps = parsed["dependencies"].as_table().unwrap();

        assert!(deps.contains_key("aws-client-core"));
        assert!(deps.contains_key("aws-client-http"));
        assert_eq!(
            deps["simple-queue-model"]["path"].as_str(),
            Some("../simple-queue-model")
        );
        assert!(!deps.contains_key("futures"));
    }

    #[test]
    fn box_future_clients_depend_on_futures() {
        let manifest = generate_client_manifest("SimpleQueue", AsyncResultType::BoxFuture);
        let parsed: toml::Value = toml::from_str(&manifest).unwrap();

        assert!(parsed["dependencies"].as_table().unwrap().contains_key("futures"));
    }
}
