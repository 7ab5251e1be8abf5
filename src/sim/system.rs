use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use rand::Rng;
use rand_distr::Distribution;

use crate::error::{Error, Result};
use crate::sim::body::{Body, DiscDistribution, RECORD_LENGTH};
use crate::sim::initial_parameters::InitialParameters;
use crate::sim::units::Float;

/// Initial state of one simulation: the disc bodies in generation order, then the central body.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySet {
    pub bodies: Vec<Body>,
}

/// What [`BodySet::inspect`] found wrong with a body set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inspection {
    pub disc_violations: Vec<(usize, Vec<String>)>,
    pub ends_with_central_body: bool,
}

impl Inspection {
    pub fn is_clean(&self) -> bool {
        self.disc_violations.is_empty() && self.ends_with_central_body
    }
}

impl BodySet {
    pub fn generate<R: Rng + ?Sized>(params: &InitialParameters, rng: &mut R) -> Result<BodySet> {
        params.validate()?;
        debug!("Sampling bodies with {:?}", params);

        let distribution = DiscDistribution::new(params);
        let mut bodies: Vec<Body> = Vec::with_capacity(params.body_count as usize);
        for _ in 0..params.disc_body_count() {
            bodies.push(distribution.sample(rng));
        }
        bodies.push(Body::central(params.central_mass));
        Ok(BodySet { bodies })
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", self.bodies.len())?;
        for body in self.bodies.iter() {
            writeln!(writer, "{}", body)?;
        }
        Ok(())
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        info!("Wrote {} bodies to {}", self.bodies.len(), path.display());
        Ok(())
    }

    /// Parses the count, then exactly that many whitespace separated records.
    pub fn parse(content: &str) -> Result<BodySet> {
        let mut tokens = content.split_ascii_whitespace().enumerate();

        let count = match tokens.next() {
            Some((_, token)) => token.parse::<usize>().map_err(|_| {
                Error::Format(format!("body count {:?} is not a non-negative integer", token))
            })?,
            None => return Err(Error::Format("file is empty".to_string())),
        };

        // The count is untrusted, records are checked before they are stored.
        let mut bodies = Vec::new();
        for body_index in 0..count {
            let mut values: [Float; RECORD_LENGTH] = [0.; RECORD_LENGTH];
            for value in values.iter_mut() {
                let (token_index, token) = tokens.next().ok_or_else(|| {
                    Error::Format(format!(
                        "expected {} bodies, body {} is incomplete",
                        count, body_index
                    ))
                })?;
                *value = token.parse().map_err(|_| {
                    Error::Format(format!("token {} ({:?}) is not a number", token_index, token))
                })?;
            }
            bodies.push(Body::from_values(values));
        }

        if let Some((token_index, token)) = tokens.next() {
            return Err(Error::Format(format!(
                "unexpected token {} ({:?}) after {} bodies",
                token_index, token, count
            )));
        }
        Ok(BodySet { bodies })
    }

    pub fn read_from_file(path: &Path) -> Result<BodySet> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Checks every body but the last against the disc ranges, and the last against the
    /// central body.
    pub fn inspect(&self, params: &InitialParameters) -> Inspection {
        let (central, disc) = match self.bodies.split_last() {
            Some((central, disc)) => (Some(central), disc),
            None => (None, &self.bodies[..]),
        };
        let disc_violations = disc
            .iter()
            .enumerate()
            .map(|(i, body)| (i, body.disc_violations(params)))
            .filter(|(_, violations)| !violations.is_empty())
            .collect();
        Inspection {
            disc_violations,
            ends_with_central_body: central
                .map_or(false, |body| body.is_central(params.central_mass)),
        }
    }
}
