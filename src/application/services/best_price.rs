//! # Best Price Selection
//!
//! Flags the cheapest quote(s) in a result set.
//!
//! The winner is the minimum over quotes with a known price; every quote
//! priced exactly at that minimum is flagged, so ties produce several
//! winners. Quotes without a price are never flagged.

use crate::domain::quote::Quote;

/// Returns the lowest known price among `quotes`.
#[must_use]
pub fn min_price(quotes: &[Quote]) -> Option<f64> {
    quotes
        .iter()
        .filter_map(|q| q.price)
        .fold(None, |min, price| match min {
            Some(m) if m <= price => Some(m),
            _ => Some(price),
        })
}

/// Sets `best` on every quote priced at the minimum and clears it on the rest.
///
/// Pure function of the price list: calling it again yields the same flags.
pub fn mark_best(quotes: &mut [Quote]) {
    let min = min_price(quotes);

    for quote in quotes.iter_mut() {
        quote.best = match (quote.price, min) {
            (Some(price), Some(min)) => price == min,
            _ => false,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::Store;

    fn quotes(prices: &[Option<f64>]) -> Vec<Quote> {
        prices
            .iter()
            .map(|p| Quote::new(Store::Amazon, *p))
            .collect()
    }

    fn flags(quotes: &[Quote]) -> Vec<bool> {
        quotes.iter().map(|q| q.best).collect()
    }

    #[test]
    fn ties_all_win() {
        let mut q = quotes(&[Some(150.0), Some(120.0), Some(120.0)]);
        mark_best(&mut q);
        assert_eq!(flags(&q), vec![false, true, true]);
    }

    #[test]
    fn unpriced_quotes_never_win() {
        let mut q = quotes(&[None, Some(300.0)]);
        mark_best(&mut q);
        assert_eq!(flags(&q), vec![false, true]);
    }

    #[test]
    fn no_known_price_clears_all() {
        let mut q = quotes(&[None, None]);
        q.iter_mut().for_each(|quote| quote.best = true);
        mark_best(&mut q);
        assert_eq!(flags(&q), vec![false, false]);
    }

    #[test]
    fn single_quote_wins() {
        let mut q = quotes(&[Some(42.5)]);
        mark_best(&mut q);
        assert!(q.iter().all(|quote| quote.best));
    }

    #[test]
    fn idempotent() {
        let mut q = quotes(&[Some(99.0), None, Some(10.0), Some(10.0)]);
        mark_best(&mut q);
        let first = flags(&q);
        mark_best(&mut q);
        mark_best(&mut q);
        assert_eq!(flags(&q), first);
    }

    #[test]
    fn empty_is_noop() {
        let mut q: Vec<Quote> = Vec::new();
        mark_best(&mut q);
        assert!(min_price(&q).is_none());
    }
}
