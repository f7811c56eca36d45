//! Spam filter with exact naive Bayes
//!
//! Run with: RUST_LOG=debug cargo run -p bayes-prob --example spam_filter
//!
//! This example demonstrates:
//! - Building a model from labeled samples
//! - Smoothed priors and likelihoods as exact fractions
//! - Posteriors that sum to exactly 1
//! - How the smoothing constant changes the picture

use bayes_core::to_f64;
use bayes_prob::{ModelConfig, NaiveBayes, TrainingData};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Spam Filter: Naive Bayes over Exact Rationals ===\n");

    let mut data = TrainingData::new();
    data.add("spam", vec!["free", "money"]);
    data.add("spam", vec!["free", "offer"]);
    data.add("spam", vec!["winner", "money", "money"]);
    data.add("ham", vec!["meeting", "project"]);
    data.add("ham", vec!["project", "report"]);
    data.add("ham", vec!["lunch", "meeting", "free"]);

    // -------------------------------------------------------------------------
    // 1. Counts
    // -------------------------------------------------------------------------
    println!("1. Counts");
    println!("---------");

    let model = NaiveBayes::new(&data);
    println!("Samples:            {}", model.total_sample_count());
    println!("Known categories:   {}", model.known_category_count());
    println!("Known attributes:   {}", model.known_attribute_count());
    for c in model.known_categories() {
        println!(
            "  {:<5} samples = {}, attribute occurrences = {}",
            c,
            model.category_sample_count(c),
            model.category_attribute_occurrences(c)
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // 2. Priors and likelihoods
    // -------------------------------------------------------------------------
    println!("2. Priors and Likelihoods (k = {})", model.smoothing_parameter());
    println!("-----------------------------------");

    for c in model.known_categories() {
        match model.category_probability(c) {
            Ok(p) => println!("P({c}) = {p} ≈ {:.4}", to_f64(&p)),
            Err(e) => println!("P({c}) undefined: {e}"),
        }
    }
    for a in ["free", "money", "project", "unseen"] {
        for c in model.known_categories() {
            if let Ok(p) = model.attribute_probability_given_category(&a, c) {
                println!("P({a} | {c}) = {p}");
            }
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 3. Posteriors
    // -------------------------------------------------------------------------
    println!("3. Posteriors");
    println!("-------------");

    let queries: [&[&str]; 4] = [&["free"], &["free", "money"], &["meeting", "free"], &[]];
    for query in queries {
        match model.posterior(query) {
            Ok(posterior) => {
                println!("Attributes {query:?}:");
                for (c, p) in &posterior {
                    println!("  P({c} | ·) = {p} ≈ {:.4}", to_f64(p));
                }
                if let Ok(Some((best, _))) = model.classify(query) {
                    println!("  → {best}");
                }
            }
            Err(e) => println!("Attributes {query:?}: {e}"),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // 4. Smoothing
    // -------------------------------------------------------------------------
    println!("4. Effect of the Smoothing Constant");
    println!("-----------------------------------");

    for k in [0, 1, 10] {
        let model = NaiveBayes::with_config(&data, &ModelConfig::with_smoothing(k));
        match model.category_probability_given_attributes(&"ham", &["free", "money"]) {
            Ok(p) => println!("k = {k:>2}: P(ham | free, money) = {p} ≈ {:.4}", to_f64(&p)),
            Err(e) => println!("k = {k:>2}: {e}"),
        }
    }
}
