// Augmentation engine: per-method cross-product recipes over a token variant
//
// Every recipe is lazy. A method's "base" sequence is produced by a factory
// function that can be called again to restart it, which is how the
// contextual-suffix pass walks the base twice (once verbatim, once suffixed)
// without materializing it.

use std::fmt::Display;
use std::iter;

use seedlist_core::case::{CaseType, apply_case, capitalize, reverse, title_case};
use seedlist_core::config::ENGINE_MIN_LENGTH;
use seedlist_core::method::{
    PLACEHOLDER_NAME, PLACEHOLDER_NUMBER, PLACEHOLDER_SYMBOL, PLACEHOLDER_WORD,
};
use seedlist_core::TransformMethod;

use crate::rng::RunRng;
use crate::substitution::{LeetVariants, PowersetVariants};
use crate::tables::{ADVANCED_INDEX_COUNT, AUGMENTATION};

/// A lazy, owned sequence of candidate strings.
pub type Candidates = Box<dyn Iterator<Item = String>>;

/// Expand one token variant with the recipe selected by `method`.
///
/// `rng` is only consulted up front (to resolve `Random` and to draw the
/// `Custom` placeholder values), so the returned iterator does not borrow it
/// and successive calls draw in call order.
///
/// Non-custom output is the method's base sequence followed by every base
/// candidate joined with every contextual suffix, with anything shorter than
/// [`ENGINE_MIN_LENGTH`] dropped. Nothing is deduplicated here.
pub fn augment(variant: &str, method: &TransformMethod, rng: &mut RunRng) -> Candidates {
    let word = variant.to_string();
    match method {
        TransformMethod::Basic => with_context(move || basic(&word)),
        TransformMethod::Advanced => with_context(move || advanced(&word)),
        TransformMethod::Complex => with_context(move || complex(&word)),
        TransformMethod::Leet => with_context(move || leet(&word)),
        TransformMethod::Custom(pattern) => Box::new(custom(variant, pattern, rng).into_iter()),
        TransformMethod::Random => {
            let chosen = rng.concrete_method();
            augment(variant, &chosen, rng)
        }
    }
}

/// Base sequence followed by the contextual-suffix pass, floored at
/// [`ENGINE_MIN_LENGTH`].
fn with_context<F>(base: F) -> Candidates
where
    F: Fn() -> Candidates,
{
    let suffixed = base().flat_map(|candidate| {
        AUGMENTATION
            .contextual_suffixes
            .iter()
            .map(move |suffix| format!("{candidate}{suffix}"))
    });
    Box::new(
        base()
            .chain(suffixed)
            .filter(|candidate| candidate.chars().count() >= ENGINE_MIN_LENGTH),
    )
}

/// `stem` joined with each item of `suffixes`.
fn suffixed<S, I>(stem: String, suffixes: I) -> impl Iterator<Item = String>
where
    S: Display,
    I: IntoIterator<Item = S>,
{
    suffixes.into_iter().map(move |suffix| format!("{stem}{suffix}"))
}

// ---------------------------------------------------------------------------
// Basic
// ---------------------------------------------------------------------------

/// The six case forms crossed by the `Basic` recipe, in output order.
pub fn basic_forms(word: &str) -> [String; 6] {
    let lower = apply_case(word, CaseType::AllLower);
    [
        word.to_string(),
        lower.clone(),
        apply_case(word, CaseType::AllUpper),
        apply_case(word, CaseType::FirstUpper),
        title_case(word),
        reverse(&lower),
    ]
}

/// Each form, then form + year, form + common number, form + special char.
fn basic(word: &str) -> Candidates {
    Box::new(basic_forms(word).into_iter().flat_map(|form| {
        let years = suffixed(form.clone(), AUGMENTATION.years());
        let numbers = suffixed(form.clone(), AUGMENTATION.common_numbers);
        let specials = suffixed(form.clone(), AUGMENTATION.special_chars);
        iter::once(form).chain(years).chain(numbers).chain(specials)
    }))
}

// ---------------------------------------------------------------------------
// Advanced
// ---------------------------------------------------------------------------

/// For the lowercase and capitalized forms: special char + two-digit index in
/// three arrangements, then years bare and wrapped by the first four specials.
fn advanced(word: &str) -> Candidates {
    let bases = [word.to_lowercase(), capitalize(word)];
    Box::new(bases.into_iter().flat_map(|base| {
        let indexed = {
            let base = base.clone();
            AUGMENTATION.special_chars.iter().flat_map(move |&c| {
                let base = base.clone();
                (0..ADVANCED_INDEX_COUNT).flat_map(move |i| {
                    [
                        format!("{base}{c}{i:02}"),
                        format!("{base}{i:02}{c}"),
                        format!("{c}{base}{i:02}"),
                    ]
                })
            })
        };
        let dated = AUGMENTATION.years().flat_map(move |year| {
            let wrapped = {
                let base = base.clone();
                AUGMENTATION
                    .year_wrapping_chars()
                    .iter()
                    .flat_map(move |&c| [format!("{base}{c}{year}"), format!("{base}{year}{c}")])
            };
            iter::once(format!("{base}{year}")).chain(wrapped)
        });
        indexed.chain(dated)
    }))
}

// ---------------------------------------------------------------------------
// Complex
// ---------------------------------------------------------------------------

/// Every power-set variant, then variant + year, then for each special char:
/// variant + char, and char/number in both orders for every common number.
fn complex(word: &str) -> Candidates {
    Box::new(PowersetVariants::new(word).flat_map(|variant| {
        let years = suffixed(variant.clone(), AUGMENTATION.years());
        let specials = {
            let variant = variant.clone();
            AUGMENTATION.special_chars.iter().flat_map(move |&c| {
                let bare = format!("{variant}{c}");
                let variant = variant.clone();
                let numbered = AUGMENTATION
                    .common_numbers
                    .iter()
                    .flat_map(move |n| [format!("{variant}{c}{n}"), format!("{variant}{n}{c}")]);
                iter::once(bare).chain(numbered)
            })
        };
        iter::once(variant).chain(years).chain(specials)
    }))
}

// ---------------------------------------------------------------------------
// Leet
// ---------------------------------------------------------------------------

/// Every leet variant, then every variant suffixed with each year and each
/// common number. The expansion is restarted for the second pass.
fn leet(word: &str) -> Candidates {
    let suffixed_variants = LeetVariants::new(word).flat_map(|variant| {
        let years = suffixed(variant.clone(), AUGMENTATION.years());
        let numbers = suffixed(variant, AUGMENTATION.common_numbers);
        years.chain(numbers)
    });
    Box::new(LeetVariants::new(word).chain(suffixed_variants))
}

// ---------------------------------------------------------------------------
// Custom
// ---------------------------------------------------------------------------

/// Fill a custom template for one token.
///
/// Each placeholder kind gets a single value per call: `[word]` the token,
/// `[name]` the capitalized token, `[number]` an integer in `0..=999`,
/// `[symbol]` one of the custom symbols. Both random values are drawn even if
/// the template does not use them, so the draw sequence depends only on the
/// number of tokens. An empty template produces nothing.
pub fn custom(word: &str, pattern: &str, rng: &mut RunRng) -> Option<String> {
    let number = rng.custom_number();
    let symbol = rng.custom_symbol();
    if pattern.is_empty() {
        return None;
    }
    Some(
        pattern
            .replace(PLACEHOLDER_WORD, word)
            .replace(PLACEHOLDER_NAME, &capitalize(word))
            .replace(PLACEHOLDER_NUMBER, &number.to_string())
            .replace(PLACEHOLDER_SYMBOL, &symbol.to_string()),
    )
}
