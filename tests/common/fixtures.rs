//! Artifact documents shared across tests.

pub const SINGLE_CLASS: &str = r#"{"apex":[{"name":"Foo","content":"class Foo{}"}]}"#;

pub const CLASS_AND_TEST: &str = r#"{
  "apex": [
    {"name": "AccountService", "content": "public class AccountService {}"},
    {"name": "Incomplete"}
  ],
  "tests": [
    {"name": "AccountServiceTest", "content": "@isTest class AccountServiceTest {}"},
    {"name": "AccountService", "content": "public class AccountService { /* v2 */ }"}
  ],
  "metadata": {"planId": "plan-42", "generator": "pipeline"}
}"#;
