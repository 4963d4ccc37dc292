//! Configuration for a simulation run.
//!
//! A run is fully described by a [`SimulationConfig`]: which policy to use,
//! how many frames there are, and the reference string to replay. The
//! `parse*` helpers turn raw form input into a validated config.

use crate::common::PageId;
use crate::error::{Error, Result};
use crate::sim::Policy;

/// Smallest number of frames a run may have.
pub const MIN_FRAMES: usize = 1;

/// Largest number of frames a run may have.
///
/// Eight slots is as many as a step grid can show side by side.
pub const MAX_FRAMES: usize = 8;

/// A validated simulation configuration.
///
/// # Example
/// ```
/// use pagesim::common::config::SimulationConfig;
/// use pagesim::Policy;
///
/// let config = SimulationConfig::parse("lru", "3", "7 0 1 2 0 3 0 4").unwrap();
/// assert_eq!(config.policy(), Policy::Lru);
/// assert_eq!(config.frame_count(), 3);
/// assert_eq!(config.references().len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    policy: Policy,
    frame_count: usize,
    references: Vec<PageId>,
}

impl SimulationConfig {
    /// Build a config, validating frame count and references.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if `frame_count` is outside
    ///   `MIN_FRAMES..=MAX_FRAMES` or `references` is empty
    pub fn new(policy: Policy, frame_count: usize, references: Vec<PageId>) -> Result<Self> {
        validate_frame_count(frame_count)?;
        if references.is_empty() {
            return Err(Error::config("reference string is empty"));
        }

        Ok(Self {
            policy,
            frame_count,
            references,
        })
    }

    /// Build a config from the three raw text inputs a form provides.
    ///
    /// # Errors
    /// - `Error::InvalidConfiguration` if any field fails to parse or validate
    pub fn parse(policy: &str, frame_count: &str, references: &str) -> Result<Self> {
        let policy: Policy = policy.parse()?;
        let frame_count = parse_frame_count(frame_count)?;
        let references = parse_references(references)?;
        Self::new(policy, frame_count, references)
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn references(&self) -> &[PageId] {
        &self.references
    }

    pub(crate) fn into_parts(self) -> (Policy, usize, Vec<PageId>) {
        (self.policy, self.frame_count, self.references)
    }
}

/// Parse a frame count and check it is in range.
pub fn parse_frame_count(input: &str) -> Result<usize> {
    let count = input
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::config(format!("frame count {:?} is not a number", input.trim())))?;
    validate_frame_count(count)?;
    Ok(count)
}

/// Parse a reference string such as `"7 0 1 2"` or `"7,0,1,2"`.
///
/// Tokens are separated by whitespace and/or commas. Every token must be a
/// non-negative integer.
///
/// # Errors
/// - `Error::InvalidConfiguration` on the first bad token, or if the input
///   holds no tokens at all
pub fn parse_references(input: &str) -> Result<Vec<PageId>> {
    let references = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<PageId>()
                .map_err(|_| Error::config(format!("{:?} is not a valid page number", token)))
        })
        .collect::<Result<Vec<_>>>()?;

    if references.is_empty() {
        return Err(Error::config("reference string is empty"));
    }
    Ok(references)
}

fn validate_frame_count(count: usize) -> Result<()> {
    if !(MIN_FRAMES..=MAX_FRAMES).contains(&count) {
        return Err(Error::config(format!(
            "frame count must be between {} and {}, got {}",
            MIN_FRAMES, MAX_FRAMES, count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[u32]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_frame_limits() {
        assert_eq!(MIN_FRAMES, 1);
        assert_eq!(MAX_FRAMES, 8);
    }

    #[test]
    fn test_parse_references_separators() {
        assert_eq!(parse_references("7 0 1").unwrap(), pages(&[7, 0, 1]));
        assert_eq!(parse_references("7,0,1").unwrap(), pages(&[7, 0, 1]));
        assert_eq!(parse_references(" 7, 0 ,\t1\n").unwrap(), pages(&[7, 0, 1]));
    }

    #[test]
    fn test_parse_references_rejects_garbage() {
        assert!(matches!(
            parse_references("1 2 x 4"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(parse_references("1 -2").is_err());
        assert!(parse_references("1.5").is_err());
        assert!(parse_references("").is_err());
        assert!(parse_references(" , ,").is_err());
    }

    #[test]
    fn test_parse_frame_count() {
        assert_eq!(parse_frame_count(" 3 ").unwrap(), 3);
        assert_eq!(parse_frame_count("1").unwrap(), 1);
        assert_eq!(parse_frame_count("8").unwrap(), 8);
        assert!(parse_frame_count("0").is_err());
        assert!(parse_frame_count("9").is_err());
        assert!(parse_frame_count("three").is_err());
    }

    #[test]
    fn test_config_new_validates() {
        assert!(SimulationConfig::new(Policy::Fifo, 3, pages(&[1])).is_ok());
        assert!(SimulationConfig::new(Policy::Fifo, 0, pages(&[1])).is_err());
        assert!(SimulationConfig::new(Policy::Fifo, 3, vec![]).is_err());
    }

    #[test]
    fn test_config_parse() {
        let config = SimulationConfig::parse("Optimal", "4", "1,2,3").unwrap();
        assert_eq!(config.policy(), Policy::Optimal);
        assert_eq!(config.frame_count(), 4);
        assert_eq!(config.references(), pages(&[1, 2, 3]).as_slice());

        assert!(SimulationConfig::parse("clock", "4", "1,2,3").is_err());
    }
}
