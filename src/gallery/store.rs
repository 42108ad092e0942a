use super::options::GalleryOptions;
use super::{Drawing, GalleryError, validate_title};
use crate::grid::GridSnapshot;
use anyhow::{Context, Result, bail};
use chrono::Utc;
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct GalleryFile {
    version: u32,
    last_modified: String,
    #[serde(default)]
    drawings: Vec<Drawing>,
}

/// File-backed drawing gallery.
///
/// Every operation opens the gallery file under an advisory lock, so several
/// processes can share one gallery directory.
#[derive(Debug, Clone)]
pub struct GalleryStore {
    options: GalleryOptions,
}

impl GalleryStore {
    pub fn new(options: GalleryOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    /// All drawings, newest first.
    pub fn list_drawings(&self) -> Result<Vec<Drawing>> {
        let path = self.options.gallery_file_path();
        if !path.exists() {
            debug!("No gallery file at {}, nothing to list", path.display());
            return Ok(Vec::new());
        }

        let mut drawings = self.with_lock(false, || read_drawings(&path))?;
        // Stable sort over the reversed file order keeps later saves first on ties.
        drawings.reverse();
        drawings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(drawings)
    }

    /// Looks up a drawing by its full id or a unique id prefix.
    pub fn get_drawing(&self, id: &str) -> Result<Drawing> {
        let mut drawings = self.list_drawings()?;
        let index = resolve_index(&drawings, id)?;
        Ok(drawings.swap_remove(index))
    }

    /// Saves a new drawing and returns the stored record.
    ///
    /// The title is trimmed and validated and the snapshot must be a
    /// well-formed grid. When the gallery is limited and full, the oldest
    /// non-permanent drawing is removed to make room.
    pub fn save_drawing(&self, title: &str, snapshot: &GridSnapshot) -> Result<Drawing> {
        let title = validate_title(title)?;
        snapshot
            .to_grid()
            .context("refusing to save a malformed grid")?;

        let now = Utc::now();
        let drawing = Drawing {
            id: Uuid::new_v4().to_string(),
            title,
            grid_data: snapshot.grid_data.clone(),
            grid_size: snapshot.grid_size,
            palette_name: snapshot.palette_name.clone(),
            created_at: now,
            updated_at: now,
            is_permanent: false,
        };

        let max_drawings = self.options.max_drawings;
        self.modify(|drawings| {
            if max_drawings > 0 {
                while drawings.len() >= max_drawings {
                    let Some(oldest) = drawings
                        .iter()
                        .enumerate()
                        .filter(|(_, d)| !d.is_permanent)
                        .min_by_key(|(_, d)| d.created_at)
                        .map(|(index, _)| index)
                    else {
                        bail!(
                            "gallery is full ({max_drawings} drawings) and every drawing is permanent"
                        );
                    };
                    let evicted = drawings.remove(oldest);
                    info!(
                        "Gallery limit reached; removed oldest drawing '{}' ({})",
                        evicted.title, evicted.id
                    );
                }
            }
            drawings.push(drawing.clone());
            Ok(())
        })?;

        info!("Saved drawing '{}' ({})", drawing.title, drawing.id);
        Ok(drawing)
    }

    /// Deletes a drawing and returns it. Permanent drawings are refused.
    pub fn delete_drawing(&self, id: &str) -> Result<Drawing> {
        let removed = self.modify(|drawings| {
            let index = resolve_index(drawings, id)?;
            if drawings[index].is_permanent {
                return Err(GalleryError::PermanentDrawing(drawings[index].id.clone()).into());
            }
            Ok(drawings.remove(index))
        })?;

        info!("Deleted drawing '{}' ({})", removed.title, removed.id);
        Ok(removed)
    }

    /// Changes a drawing's title and bumps its `updated_at`.
    pub fn rename_drawing(&self, id: &str, title: &str) -> Result<Drawing> {
        let title = validate_title(title)?;
        self.update(id, |drawing| drawing.title = title)
    }

    /// Marks a drawing as permanent (protected from deletion and eviction) or
    /// clears the mark.
    pub fn set_permanent(&self, id: &str, permanent: bool) -> Result<Drawing> {
        self.update(id, |drawing| drawing.is_permanent = permanent)
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut Drawing)) -> Result<Drawing> {
        let updated = self.modify(|drawings| {
            let index = resolve_index(drawings, id)?;
            let drawing = &mut drawings[index];
            apply(drawing);
            drawing.updated_at = Utc::now();
            Ok(drawing.clone())
        })?;
        debug!("Updated drawing {}", updated.id);
        Ok(updated)
    }

    /// Read-modify-write under an exclusive lock.
    fn modify<T>(&self, apply: impl FnOnce(&mut Vec<Drawing>) -> Result<T>) -> Result<T> {
        fs::create_dir_all(&self.options.base_dir).with_context(|| {
            format!(
                "failed to create gallery directory {}",
                self.options.base_dir.display()
            )
        })?;

        self.with_lock(true, || {
            let path = self.options.gallery_file_path();
            let mut drawings = if path.exists() {
                read_drawings(&path)?
            } else {
                Vec::new()
            };
            let result = apply(&mut drawings)?;
            write_drawings(&drawings, &self.options)?;
            Ok(result)
        })
    }

    fn with_lock<T>(&self, exclusive: bool, run: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock_path = self.options.lock_file_path();
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open gallery lock file {}", lock_path.display()))?;
        if exclusive {
            lock_file
                .lock_exclusive()
                .with_context(|| format!("failed to lock gallery file {}", lock_path.display()))?;
        } else {
            lock_file.lock_shared().with_context(|| {
                format!("failed to acquire shared lock {}", lock_path.display())
            })?;
        }

        let result = run();

        lock_file.unlock().unwrap_or_else(|err| {
            warn!(
                "failed to unlock gallery file {}: {}",
                lock_path.display(),
                err
            )
        });

        result
    }
}

/// Finds a drawing by exact id, then by unique id prefix.
fn resolve_index(drawings: &[Drawing], id: &str) -> Result<usize, GalleryError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(GalleryError::NotFound(id.to_string()));
    }
    if let Some(index) = drawings.iter().position(|d| d.id == id) {
        return Ok(index);
    }

    let mut matches = drawings
        .iter()
        .enumerate()
        .filter(|(_, d)| d.id.starts_with(id))
        .map(|(index, _)| index);
    match (matches.next(), matches.next()) {
        (Some(index), None) => Ok(index),
        (Some(_), Some(_)) => Err(GalleryError::AmbiguousId(id.to_string())),
        (None, _) => Err(GalleryError::NotFound(id.to_string())),
    }
}

fn read_drawings(path: &Path) -> Result<Vec<Drawing>> {
    let mut bytes = Vec::new();
    File::open(path)
        .with_context(|| format!("failed to open gallery file {}", path.display()))?
        .read_to_end(&mut bytes)
        .context("failed to read gallery file")?;

    let file: GalleryFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse gallery json {}", path.display()))?;
    if file.version > CURRENT_VERSION {
        warn!(
            "Gallery file {} has version {}, newer than supported version {}",
            path.display(),
            file.version,
            CURRENT_VERSION
        );
    }
    debug!(
        "Read {} drawings from {} (last modified {})",
        file.drawings.len(),
        path.display(),
        file.last_modified
    );
    Ok(file.drawings)
}

fn write_drawings(drawings: &[Drawing], options: &GalleryOptions) -> Result<()> {
    let gallery_path = options.gallery_file_path();
    let backup_path = options.backup_file_path();

    let payload = GalleryFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        drawings: drawings.to_vec(),
    };
    let json_bytes =
        serde_json::to_vec_pretty(&payload).context("failed to serialise gallery payload")?;

    // Callers hold the exclusive lock, so any existing temp file is an orphan
    // from a writer that died mid-save.
    let tmp_path = temp_path(&gallery_path);
    if tmp_path.exists() {
        warn!(
            "Removing stale temporary gallery file {}",
            tmp_path.display()
        );
        fs::remove_file(&tmp_path).with_context(|| {
            format!(
                "failed to remove stale temporary gallery file {}",
                tmp_path.display()
            )
        })?;
    }
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| {
                format!(
                    "failed to open temporary gallery file {}",
                    tmp_path.display()
                )
            })?;
        tmp_file
            .write_all(&json_bytes)
            .context("failed to write gallery payload")?;
        tmp_file
            .sync_all()
            .context("failed to sync temporary gallery file")?;
    }

    if gallery_path.exists() {
        if options.backup_retention > 0 {
            if backup_path.exists() {
                fs::remove_file(&backup_path).ok();
            }
            fs::rename(&gallery_path, &backup_path).with_context(|| {
                format!(
                    "failed to rotate previous gallery file {} -> {}",
                    gallery_path.display(),
                    backup_path.display()
                )
            })?;
        } else {
            fs::remove_file(&gallery_path).ok();
        }
    }

    fs::rename(&tmp_path, &gallery_path).with_context(|| {
        format!(
            "failed to move temporary gallery file {} -> {}",
            tmp_path.display(),
            gallery_path.display()
        )
    })?;

    debug!(
        "Gallery written to {} ({} drawings, {} bytes)",
        gallery_path.display(),
        drawings.len(),
        json_bytes.len()
    );
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    target.with_extension("json.tmp")
}
