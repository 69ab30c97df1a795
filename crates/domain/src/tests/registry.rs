// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashSet;

use crate::ApplicationCategory;
use crate::registry::{
    APPLICATION_TYPES, claimant_label, find_by_code, find_by_url, require_by_code,
    respondent_application_types,
};

#[test]
fn test_codes_and_urls_are_unique() {
    let codes: HashSet<&str> = APPLICATION_TYPES.iter().map(|d| d.code).collect();
    let urls: HashSet<&str> = APPLICATION_TYPES.iter().map(|d| d.url).collect();
    assert_eq!(codes.len(), APPLICATION_TYPES.len());
    assert_eq!(urls.len(), APPLICATION_TYPES.len());
}

#[test]
fn test_find_by_code_and_url_agree() {
    for descriptor in APPLICATION_TYPES {
        assert_eq!(find_by_code(descriptor.code), Some(descriptor));
        assert_eq!(find_by_url(descriptor.url), Some(descriptor));
    }
}

#[test]
fn test_unknown_lookups_return_none() {
    assert!(find_by_code("Make tea").is_none());
    assert!(find_by_url("make-tea").is_none());
    assert!(require_by_code("Make tea").is_err());
}

#[test]
fn test_witness_order_is_category_c_and_never_shared() {
    let witness = find_by_code("Order a witness to attend to give evidence").unwrap();
    assert_eq!(witness.category, ApplicationCategory::C);
    assert!(witness.excluded_from_sharing());
    assert!(!witness.requires_copy_step());
}

#[test]
fn test_category_a_and_b_require_copy_step() {
    for descriptor in APPLICATION_TYPES {
        let expected: bool = descriptor.category != ApplicationCategory::C;
        assert_eq!(descriptor.requires_copy_step(), expected, "{}", descriptor.code);
    }
}

#[test]
fn test_respondent_types_exclude_claimant_only_types() {
    let codes: Vec<&str> = respondent_application_types().map(|d| d.code).collect();
    assert!(codes.contains(&"Amend response"));
    assert!(!codes.contains(&"Withdraw all or part of claim"));
}

#[test]
fn test_claimant_label_falls_back_to_code() {
    assert_eq!(claimant_label("Amend response"), "Amend my claim");
    assert_eq!(claimant_label("Unregistered type"), "Unregistered type");
}
