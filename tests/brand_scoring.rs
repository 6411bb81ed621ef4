// tests/brand_scoring.rs
//
// Public-API checks for the brand alignment scorer, including a seeded
// randomized sweep over generated matrices.

use rand::{rngs::StdRng, Rng, SeedableRng};
use values_alignment::{explain_brand, score_brand, Cause, ValueAssociation, ValuesMatrix};

fn acme_support_matrix() -> ValuesMatrix {
    ValuesMatrix::new().with_value("v1", ValueAssociation::new(["Acme"], Vec::<String>::new()))
}

#[test]
fn fully_aligned_sole_mention() {
    let causes = [Cause::support("v1").weighted(1.0)];
    assert_eq!(score_brand("Acme", &causes, &acme_support_matrix()), 100);
}

#[test]
fn avoided_value_supported_by_brand() {
    let causes = [Cause::avoid("v1").weighted(1.0)];
    assert_eq!(score_brand("Acme", &causes, &acme_support_matrix()), 0);
}

#[test]
fn neutral_cases_return_50() {
    let m = acme_support_matrix();
    assert_eq!(score_brand("Acme", &[], &m), 50);
    assert_eq!(score_brand("", &[Cause::support("v1")], &m), 50);
    assert_eq!(score_brand("Globex", &[Cause::support("v1")], &m), 50);
    assert_eq!(score_brand("Acme", &[Cause::support("v1")], &ValuesMatrix::new()), 50);
}

#[test]
fn matrix_json_from_data_provider_scores_case_insensitively() {
    let m: ValuesMatrix = serde_json::from_str(
        r#"{
            "eco":   {"support": ["PATAGONIA", "acme"], "oppose": ["Oilco"]},
            "labor": {"support": [], "oppose": ["Acme"]}
        }"#,
    )
    .unwrap();
    let causes: Vec<Cause> = serde_json::from_str(
        r#"[{"id":"eco","type":"support"},{"id":"labor","type":"support","weight":2}]"#,
    )
    .unwrap();

    // eco: +0.755 (index 1 of 2), labor: -2 -> raw -1.245 / 3
    // 50 - 20.75 = 29.25 -> 29
    assert_eq!(score_brand("Acme", &causes, &m), 29);
    assert_eq!(score_brand("patagonia", &causes, &m), 67);
}

#[test]
fn randomized_scores_stay_in_range_and_match_breakdown() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let brands: Vec<String> = (0..30).map(|i| format!("Brand{i}")).collect();

    for _ in 0..200 {
        let mut m = ValuesMatrix::new();
        let n_values = rng.random_range(0..8);
        for v in 0..n_values {
            let support: Vec<String> = (0..rng.random_range(0..10))
                .map(|_| brands[rng.random_range(0..brands.len())].clone())
                .collect();
            let oppose: Vec<String> = (0..rng.random_range(0..10))
                .map(|_| brands[rng.random_range(0..brands.len())].to_uppercase())
                .collect();
            m.insert(format!("v{v}"), &ValueAssociation::new(support, oppose));
        }

        let causes: Vec<Cause> = (0..rng.random_range(0..10))
            .map(|_| {
                let id = format!("v{}", rng.random_range(0..10));
                let c = if rng.random_bool(0.5) {
                    Cause::support(id)
                } else {
                    Cause::avoid(id)
                };
                c.weighted(rng.random_range(0.1..3.0))
            })
            .collect();

        for b in &brands {
            let s = score_brand(b, &causes, &m);
            assert!(s <= 100);
            let bd = explain_brand(b, &causes, &m);
            assert_eq!(bd.score, s);
            if bd.contributions.is_empty() {
                assert_eq!(s, 50, "unmentioned brand must be neutral");
            }
        }
    }
}
