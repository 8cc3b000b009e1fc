use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{
    common::{amount::Amount, error::AppError, event::LedgerIntent},
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

/// A ledger persisted as one CSV file, rewritten in full after every change.
///
/// There is no locking: two processes sharing a path will overwrite each
/// other's saves.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with only the header row when it does not exist yet.
    /// Returns `true` if a file was created.
    pub fn init(&self) -> Result<bool, AppError> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        self.save(&Ledger::new())?;
        tracing::info!(path = %self.path.display(), "initialized empty ledger file");
        Ok(true)
    }

    pub fn load(&self) -> Result<Ledger, AppError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::StorageMissing(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let ledger = reader::load_ledger(BufReader::new(file))?;
        tracing::debug!(
            path = %self.path.display(),
            categories = ledger.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    /// Replaces the file with a full snapshot of `ledger`.
    ///
    /// The snapshot goes to a uniquely named temporary file in the same
    /// directory and is renamed over the original, so an interrupted save
    /// leaves the previous file intact. The temporary file is removed on any
    /// error.
    pub fn save(&self, ledger: &Ledger) -> Result<(), AppError> {
        let tmp = write_snapshot(self.dir(), ledger)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(
            path = %self.path.display(),
            categories = ledger.len(),
            "ledger saved"
        );
        Ok(())
    }

    /// Applies `intent` and persists the result.
    ///
    /// `ledger` is only updated once the new snapshot is on disk; on any error
    /// both the file and `ledger` keep their previous contents.
    pub fn apply(&self, ledger: &mut Ledger, intent: LedgerIntent) -> Result<(), AppError> {
        let kind = intent.kind();
        let mut next = ledger.clone();
        Processor::new().process(&mut next, intent)?;
        self.save(&next)?;
        *ledger = next;
        tracing::info!(intent = kind, categories = ledger.len(), "ledger updated");
        Ok(())
    }

    pub fn add(&self, ledger: &mut Ledger, category: &str, amount: Amount) -> Result<(), AppError> {
        self.apply(
            ledger,
            LedgerIntent::AddExpense {
                category: category.to_owned(),
                amount,
            },
        )
    }

    pub fn rename(
        &self,
        ledger: &mut Ledger,
        old: &str,
        new: &str,
        amount: Amount,
    ) -> Result<(), AppError> {
        self.apply(
            ledger,
            LedgerIntent::RenameCategory {
                old: old.to_owned(),
                new: new.to_owned(),
                amount,
            },
        )
    }

    pub fn delete(&self, ledger: &mut Ledger, category: &str) -> Result<(), AppError> {
        self.apply(
            ledger,
            LedgerIntent::DeleteCategory {
                name: category.to_owned(),
            },
        )
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

fn write_snapshot(dir: &Path, ledger: &Ledger) -> Result<NamedTempFile, AppError> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        writer::write_ledger(&mut out, ledger)?;
        out.flush()?;
    }
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
