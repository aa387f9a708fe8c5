// Model serde tests are included in models/webhook.rs

// Include extractor tests
#[path = "extractor_test.rs"]
mod extractor_tests;
