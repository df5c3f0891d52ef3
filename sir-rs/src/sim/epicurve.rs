use crate::{
    error::Result,
    models::Snapshot,
    prelude::{Real, Time},
};
use std::{io, iter::FromIterator, path::Path};

/// Column storage of snapshots, one row per step including the initial state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Epicurve {
    time: Vec<Time>,
    susceptible: Vec<Real>,
    infected: Vec<Real>,
    recovered: Vec<Real>,
    dead: Vec<Real>,
}

impl Epicurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new row.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.time.push(snapshot.time);
        self.susceptible.push(snapshot.susceptible);
        self.infected.push(snapshot.infected);
        self.recovered.push(snapshot.recovered);
        self.dead.push(snapshot.dead);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Return the i-th row.
    pub fn row(&self, i: usize) -> Option<Snapshot> {
        if i >= self.len() {
            return None;
        }
        Some(Snapshot {
            time: self.time[i],
            susceptible: self.susceptible[i],
            infected: self.infected[i],
            recovered: self.recovered[i],
            dead: self.dead[i],
        })
    }

    /// Return the last row.
    pub fn tip(&self) -> Option<Snapshot> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Snapshot> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    pub fn times(&self) -> &[Time] {
        &self.time
    }

    pub fn susceptible(&self) -> &[Real] {
        &self.susceptible
    }

    pub fn infected(&self) -> &[Real] {
        &self.infected
    }

    pub fn recovered(&self) -> &[Real] {
        &self.recovered
    }

    pub fn dead(&self) -> &[Real] {
        &self.dead
    }

    /// True if some compartment went negative at any step.
    pub fn has_negative(&self) -> bool {
        self.iter().any(|s| s.has_negative())
    }

    /// Write epicurves as CSV with a header row.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in self.iter() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write epicurves as CSV to the given path.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }

    /// Render epicurves as CSV data
    pub fn render_csv(&self) -> Result<String> {
        let mut data = Vec::new();
        self.write_csv(&mut data)?;
        Ok(String::from_utf8_lossy(&data).into_owned())
    }
}

impl FromIterator<Snapshot> for Epicurve {
    fn from_iter<I: IntoIterator<Item = Snapshot>>(iter: I) -> Self {
        let mut curve = Epicurve::new();
        for snapshot in iter {
            curve.push(snapshot);
        }
        return curve;
    }
}

impl Extend<Snapshot> for Epicurve {
    fn extend<I: IntoIterator<Item = Snapshot>>(&mut self, iter: I) {
        for snapshot in iter {
            self.push(snapshot);
        }
    }
}
