use crate::sparse::{step, Cell, Generation};
use std::fmt;
use tracing::{debug, info};

/// Lifecycle of a simulation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    /// The population died out.
    Extinct,
    /// Stopped from outside (window closed, escape pressed).
    Stopped,
}

/// Owns the state of one run: the current generation and the generation counter.
///
/// The first generation counts as generation 1; the counter grows by one for
/// every tick that leaves at least one live cell.
pub struct Driver {
    starting_cells: Vec<Cell>,
    current: Generation,
    generation: u64,
    status: Status,
}

impl Driver {
    /// `starting_cells` are kept as given (duplicates included) for the final
    /// report; the first generation is built from them.
    pub fn new(starting_cells: Vec<Cell>) -> Self {
        let current = starting_cells.iter().collect::<Generation>();
        info!(
            requested = starting_cells.len(),
            population = current.population(),
            "simulation started"
        );
        Self {
            starting_cells,
            current,
            generation: 1,
            status: Status::Running,
        }
    }

    pub fn current(&self) -> &Generation {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn starting_cells(&self) -> &[Cell] {
        &self.starting_cells
    }

    /// Advances the simulation by one generation unless it has already ended.
    pub fn tick(&mut self) -> Status {
        if !self.is_running() {
            return self.status;
        }
        self.current = step(&self.current);
        if self.current.is_empty() {
            self.status = Status::Extinct;
            info!(generation = self.generation, "population died out");
        } else {
            self.generation += 1;
            debug!(
                generation = self.generation,
                population = self.current.population()
            );
        }
        self.status
    }

    /// Stops a running simulation; an extinct one stays extinct.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.status = Status::Stopped;
            info!(generation = self.generation, "simulation stopped");
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            starting_cells: self.starting_cells.clone(),
            generations: self.generation,
        }
    }
}

/// What gets reported once the run is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub starting_cells: Vec<Cell>,
    pub generations: u64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{0}END{0}", "_".repeat(38))?;
        write!(f, "\n\nStarting coordinates: \n[")?;
        for (i, cell) in self.starting_cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        writeln!(f, "]")?;
        write!(
            f,
            "\n\nNumber of generations at termination: {}",
            self.generations
        )
    }
}
