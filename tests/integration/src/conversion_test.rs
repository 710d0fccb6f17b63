//! End-to-end test for the consolidation flow
//!
//! Exercises the complete path: ACL registration -> node-type resolution
//! against extracted package content on disk -> ordered script emission.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use repoinit_acl::{AclConsolidator, Error, REPOINIT_EXTENSION_NAME};
use repoinit_content::{CONTENT_XML, PackageContentResolver};
use tempfile::TempDir;

/// Materialize a directory for `repo_path` under the content root, with
/// optional `.content.xml` metadata.
fn materialize(root: &Path, repo_path: &str, metadata: Option<&str>) {
    let mut dir = root.to_path_buf();
    for segment in repo_path.split('/').filter(|s| !s.is_empty()) {
        dir = dir.join(segment);
    }
    fs::create_dir_all(&dir).unwrap();
    if let Some(xml) = metadata {
        fs::write(dir.join(CONTENT_XML), xml).unwrap();
    }
}

/// Set up extracted package content: `/content` carries metadata with an
/// explicit primary type, `/content/foo` is a bare directory.
fn setup_package_content() -> TempDir {
    let temp = TempDir::new().unwrap();
    materialize(
        temp.path(),
        "/content",
        Some(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<jcr:root xmlns:jcr="http://www.jcp.org/jcr/1.0"
    jcr:primaryType="sling:OrderedFolder"/>"#,
        ),
    );
    materialize(temp.path(), "/content/foo", None);
    temp
}

#[test]
fn test_conversion_emits_ordered_script() {
    let temp = setup_package_content();
    let resolver = PackageContentResolver::new(temp.path());

    let mut consolidator = AclConsolidator::new();
    consolidator.register_system_user("sling-reader");
    consolidator.register_system_user("sling-writer");
    consolidator.register_acl("sling-reader", "allow", "jcr:read", "/content/foo");
    consolidator.register_acl("sling-writer", "allow", "jcr:read,rep:write", "/var/audit");
    consolidator.register_acl("sling-writer", "deny", "jcr:all", "/content");

    let script = consolidator.generate_script(&resolver).unwrap().unwrap();
    assert_eq!(
        script,
        "create path (sling:OrderedFolder) /content\n\
         create path (sling:Folder) /content/foo\n\
         create path (sling:Folder) /var\n\
         create path (sling:Folder) /var/audit\n\
         create service user sling-reader\n\
         set ACL for sling-reader\n\
         allow jcr:read on /content/foo\n\
         end\n\
         create service user sling-writer\n\
         set ACL for sling-writer\n\
         allow jcr:read,rep:write on /var/audit\n\
         deny jcr:all on /content\n\
         end\n"
    );
}

#[test]
fn test_malformed_metadata_aborts_the_conversion() {
    let temp = TempDir::new().unwrap();
    materialize(temp.path(), "/content", Some("<jcr:root jcr:primaryType="));
    let resolver = PackageContentResolver::new(temp.path());

    let mut consolidator = AclConsolidator::new();
    consolidator.register_system_user("svc");
    consolidator.register_acl("svc", "allow", "jcr:read", "/content/foo");

    let err = consolidator.generate_script(&resolver).unwrap_err();
    let Error::TypeResolution { path, .. } = err;
    assert_eq!(path.as_str(), "/content");
}

#[test]
fn test_conversion_without_system_users_emits_nothing() {
    let temp = setup_package_content();
    let resolver = PackageContentResolver::new(temp.path());

    let mut consolidator = AclConsolidator::new();
    consolidator.register_acl("unregistered", "allow", "jcr:read", "/content");
    assert_eq!(consolidator.generate_script(&resolver).unwrap(), None);
}

#[test]
fn test_extension_payload_embeds_in_feature_json() {
    let temp = setup_package_content();
    let resolver = PackageContentResolver::new(temp.path());

    let mut consolidator = AclConsolidator::new();
    consolidator.register_system_user("sling-reader");
    consolidator.register_acl("sling-reader", "allow", "jcr:read", "/content");

    let extension = consolidator.repoinit_extension(&resolver).unwrap().unwrap();
    assert_eq!(extension.name, REPOINIT_EXTENSION_NAME);

    let feature = serde_json::json!({
        "id": "org.example:converted-package:1.0.0",
        "extensions": [extension],
    });
    let kind = &feature["extensions"][0]["kind"];
    assert_eq!(kind, "text");
    let text = feature["extensions"][0]["text"].as_str().unwrap();
    assert!(text.contains("create service user sling-reader\n"));
}

#[test]
fn test_reset_supports_a_second_conversion_run() {
    let temp = setup_package_content();
    let resolver = PackageContentResolver::new(temp.path());

    let mut consolidator = AclConsolidator::new();
    consolidator.register_system_user("svc-one");
    consolidator.register_acl("svc-one", "allow", "jcr:read", "/content");
    consolidator.generate_script(&resolver).unwrap().unwrap();

    consolidator.reset();
    consolidator.register_system_user("svc-two");
    consolidator.register_acl("svc-two", "allow", "jcr:read", "/content/foo");

    let script = consolidator.generate_script(&resolver).unwrap().unwrap();
    assert_eq!(
        script,
        "create path (sling:OrderedFolder) /content\n\
         create path (sling:Folder) /content/foo\n\
         create service user svc-two\n\
         set ACL for svc-two\n\
         allow jcr:read on /content/foo\n\
         end\n"
    );
}
