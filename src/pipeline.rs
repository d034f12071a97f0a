//! The cleaning pipeline over a batch of beatmap archives.
//!
//! A run goes through these steps:
//!
//! 1. The workspace and output directories are emptied.
//! 2. The outer archive is unpacked, then each `.osz` inside it is unpacked into its own staging directory.
//! 3. The staged files of a map are sniffed and classified into a [`MapWorkItem`].
//! 4. The descriptor is rewritten, the audio candidates are validated and, if enabled, the background is resolved.
//! 5. A cleaned `.osz` is written under the output directory.
//!
//! Maps are processed one by one in archive order. Faults of a map are collected into its [`MapReport`] and never stop the batch.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    archive::{ArchiveBuilder, extract_archive, reset_workspace},
    asset::{AssetKind, AudioFormat, classify, sniff_type},
    audio::{AudioProbe, AudioValidator, AudioVerdict, LoftyProbe, check_accepted_count},
    background::{ImageCandidate, resolve_background},
    config::Config,
    descriptor::{RewriteOptions, RewriteWarning, event::BackgroundRef, rewrite_descriptor},
    error::{IoResultExt, MapFault, Result},
};

/// A staged file of a beatmap archive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StagedFile {
    /// The entry name in the archive.
    pub entry_name: String,
    /// Where the file is staged.
    pub path: PathBuf,
}

/// A candidate of the beatmap track.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AudioCandidate {
    /// The staged file.
    pub file: StagedFile,
    /// The sniffed container.
    pub format: AudioFormat,
}

/// The classified files of one beatmap archive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MapWorkItem {
    /// The entry name of the `.osz` in the outer archive.
    pub archive_name: String,
    /// The staging directory of the map.
    pub stage_dir: PathBuf,
    /// Descriptor files, normally exactly one.
    pub descriptors: Vec<StagedFile>,
    /// Audio candidates in archive order.
    pub audio: Vec<AudioCandidate>,
    /// Image candidates in archive order.
    pub images: Vec<ImageCandidate>,
}

impl MapWorkItem {
    /// Sniffs and classifies the staged entries.
    ///
    /// # Errors
    ///
    /// Fails when a staged file cannot be read.
    pub fn classify_entries(
        archive_name: impl Into<String>,
        stage_dir: impl Into<PathBuf>,
        entries: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        let mut item = Self {
            archive_name: archive_name.into(),
            stage_dir: stage_dir.into(),
            ..Self::default()
        };
        for entry_name in entries {
            let path = item.stage_dir.join(&entry_name);
            let sniffed = sniff_type(&path).at_path(&path)?;
            let kind = classify(&entry_name, sniffed.as_ref());
            tracing::debug!(entry = %entry_name, ?kind, "classified");
            let file = StagedFile { entry_name, path };
            match kind {
                AssetKind::Descriptor => item.descriptors.push(file),
                AssetKind::Audio(format) => item.audio.push(AudioCandidate { file, format }),
                AssetKind::Image(format) => item.images.push(ImageCandidate {
                    entry_name: file.entry_name,
                    format,
                    path: file.path,
                }),
                AssetKind::Ignored => {}
            }
        }
        Ok(item)
    }

    /// The file name of the emitted descriptor, `<archive stem>.osu`.
    #[must_use]
    pub fn descriptor_name(&self) -> String {
        let stem = Path::new(&self.archive_name)
            .file_stem()
            .map_or_else(|| self.archive_name.clone(), |stem| stem.to_string_lossy().into_owned());
        format!("{stem}.osu")
    }
}

/// The outcome of one beatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapReport {
    /// The entry name of the `.osz` in the outer archive.
    pub archive: String,
    /// The written archive.
    pub output: PathBuf,
    /// Faults in occurrence order.
    pub faults: Vec<MapFault>,
    /// Audio candidates skipped as hit sounds.
    pub skipped_audio: Vec<String>,
    /// The canonical name of the included background, if any.
    pub background: Option<String>,
}

/// The outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BatchReport {
    /// One report per beatmap, in archive order.
    pub maps: Vec<MapReport>,
}

impl BatchReport {
    /// Total number of faults over all maps.
    #[must_use]
    pub fn fault_count(&self) -> usize {
        self.maps.iter().map(|map| map.faults.len()).sum()
    }

    /// Writes the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).at_path(path)
    }
}

/// Runs the pipeline with a configuration.
#[derive(Debug, Clone)]
pub struct Cleaner<P> {
    config: Config,
    validator: AudioValidator<P>,
}

impl Cleaner<LoftyProbe> {
    /// Creates a cleaner probing audio with `lofty`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self::with_probe(config, LoftyProbe)
    }
}

impl<P: AudioProbe> Cleaner<P> {
    /// Creates a cleaner with a custom audio probe.
    pub const fn with_probe(config: Config, probe: P) -> Self {
        Self {
            config,
            validator: AudioValidator::new(probe),
        }
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Cleans every beatmap archive in the input.
    ///
    /// # Errors
    ///
    /// Fails when an archive cannot be extracted or written. Faults of single maps are reported instead.
    pub fn run(&self) -> Result<BatchReport> {
        tracing::info!("start");
        let unpacked = self.config.unpacked_dir();
        reset_workspace(&[&unpacked, &self.config.maps_dir(), &self.config.output])?;

        let archives = extract_archive(&self.config.input, &unpacked)?;
        let mut report = BatchReport::default();
        for archive_name in archives {
            let map = self.clean_map(&archive_name)?;
            report.maps.push(map);
        }

        tracing::info!(
            maps = report.maps.len(),
            faults = report.fault_count(),
            "done"
        );
        Ok(report)
    }

    /// Cleans one beatmap archive already unpacked from the outer archive.
    ///
    /// # Errors
    ///
    /// Fails when the archive cannot be extracted or the cleaned one cannot be written.
    pub fn clean_map(&self, archive_name: &str) -> Result<MapReport> {
        let _span = tracing::info_span!("map", archive = %archive_name).entered();
        tracing::info!("Filename: '{archive_name}'");

        let stage_dir = self.config.maps_dir().join(archive_name);
        let entries = extract_archive(self.config.unpacked_dir().join(archive_name), &stage_dir)?;
        let item = MapWorkItem::classify_entries(archive_name, stage_dir, entries)?;

        let mut builder = ArchiveBuilder::new();
        let mut faults = vec![];

        let background = self.rewrite_descriptors(&item, &mut builder, &mut faults)?;
        let skipped_audio = self.validate_audio(&item, &mut builder, &mut faults)?;
        let background = match background {
            Some(reference) if self.config.background => {
                Self::include_background(&item, &reference, &mut builder)?
            }
            _ => None,
        };

        let output = self.config.output.join(
            Path::new(archive_name)
                .file_name()
                .unwrap_or_else(|| archive_name.as_ref()),
        );
        builder.write_zip(&output)?;

        for fault in &faults {
            tracing::error!(%fault, "map fault");
        }
        tracing::info!(output = %output.display(), "Generated clean `.osz`");
        tracing::warn!("---");

        Ok(MapReport {
            archive: archive_name.to_string(),
            output,
            faults,
            skipped_audio,
            background,
        })
    }

    /// Rewrites the descriptors. The last one processed is the one emitted, and its background declaration is returned.
    ///
    /// A declaration is kept only when the image it names is in the archive, so the emitted descriptor never points at a missing file.
    fn rewrite_descriptors(
        &self,
        item: &MapWorkItem,
        builder: &mut ArchiveBuilder,
        faults: &mut Vec<MapFault>,
    ) -> Result<Option<BackgroundRef>> {
        if item.descriptors.len() != 1 {
            faults.push(MapFault::DescriptorCount(item.descriptors.len()));
        }
        let options = RewriteOptions {
            preserve_background: self.config.background,
        };
        let mut background = None;
        for descriptor in &item.descriptors {
            tracing::debug!(entry = %descriptor.entry_name, "rewriting descriptor");
            let bytes = std::fs::read(&descriptor.path).at_path(&descriptor.path)?;
            let source = String::from_utf8_lossy(&bytes);
            let mut output = rewrite_descriptor(&source, options);

            #[cfg(feature = "diagnostics")]
            if self.config.diagnostics {
                crate::diagnostics::emit_rewrite_warnings(
                    &descriptor.entry_name,
                    &source,
                    &output.warnings,
                );
            }
            faults.extend(output.warnings.iter().map(|warning| match warning.content() {
                RewriteWarning::UnresolvedAudioExtension { line } => {
                    MapFault::UnresolvedAudioExtension {
                        descriptor: descriptor.entry_name.clone(),
                        line: *line,
                    }
                }
            }));

            if let Some(reference) = &output.background
                && resolve_background(reference, &item.images).is_none()
            {
                tracing::warn!(
                    filename = %reference.filename,
                    "declared background not in archive, dropping the declaration"
                );
                output = rewrite_descriptor(
                    &source,
                    RewriteOptions {
                        preserve_background: false,
                    },
                );
            }

            builder.add_buffer(item.descriptor_name(), output.text);
            background = output.background;
        }
        Ok(background)
    }

    /// Validates the audio candidates, renaming the accepted ones. Returns the skipped candidates.
    fn validate_audio(
        &self,
        item: &MapWorkItem,
        builder: &mut ArchiveBuilder,
        faults: &mut Vec<MapFault>,
    ) -> Result<Vec<String>> {
        let mut accepted = 0;
        let mut skipped = vec![];
        for AudioCandidate { file, format } in &item.audio {
            let bytes = std::fs::read(&file.path).at_path(&file.path)?;
            match self.validator.validate(&file.entry_name, *format, &bytes) {
                Ok(AudioVerdict::Rejected { duration }) => {
                    tracing::debug!(entry = %file.entry_name, ?duration, "skipped short audio");
                    skipped.push(file.entry_name.clone());
                }
                Ok(AudioVerdict::Accepted {
                    canonical_name,
                    faults: bitrate_faults,
                }) => {
                    accepted += 1;
                    let renamed = item.stage_dir.join(canonical_name);
                    std::fs::rename(&file.path, &renamed).at_path(&file.path)?;
                    builder.add_local_file(canonical_name, renamed);
                    faults.extend(bitrate_faults);
                }
                Err(fault) => faults.push(fault),
            }
        }
        faults.extend(check_accepted_count(accepted));
        Ok(skipped)
    }

    /// Renames and adds the declared background image, if present in the archive.
    fn include_background(
        item: &MapWorkItem,
        reference: &BackgroundRef,
        builder: &mut ArchiveBuilder,
    ) -> Result<Option<String>> {
        let Some(resolved) = resolve_background(reference, &item.images) else {
            tracing::debug!(filename = %reference.filename, "background image not found");
            return Ok(None);
        };
        let renamed = item.stage_dir.join(resolved.canonical_name);
        std::fs::rename(&resolved.image.path, &renamed).at_path(&resolved.image.path)?;
        builder.add_local_file(resolved.canonical_name, renamed);
        Ok(Some(resolved.canonical_name.to_string()))
    }
}

/// Cleans the batch described by the configuration, probing audio with `lofty`.
///
/// # Errors
///
/// See [`Cleaner::run`].
pub fn clean_batch(config: Config) -> Result<BatchReport> {
    Cleaner::new(config).run()
}
