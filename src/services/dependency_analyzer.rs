use indexmap::IndexMap;
use crate::config::constants::ROOT_FOLDER;
use crate::enums::dependency_kind::DependencyKind;
use crate::enums::dependency_status::DependencyStatus;
use crate::helpers::format_helper::FormatHelper;
use crate::structs::dependency::Dependency;
use crate::structs::dependency_endpoint::DependencyEndpoint;
use crate::structs::file_entry::FileEntry;
use crate::traits::confidence_source::ConfidenceSource;

const ID_PREFIX: &str = "DEP";
const DETECTED_DATE: &str = "Just now";

/// Suggests dependencies between neighbouring files of the same folder.
///
/// This is a placeholder for import-graph analysis: the only signal is the
/// directory layout, and confidence comes from the injected source.
pub struct DependencyAnalyzer;

impl DependencyAnalyzer {
    pub fn group_by_folder(files: &[FileEntry]) -> IndexMap<String, Vec<String>> {
        let mut folders: IndexMap<String, Vec<String>> = IndexMap::new();
        for file in files {
            let folder = file.folder().unwrap_or(ROOT_FOLDER);
            folders.entry(folder.to_string()).or_default().push(file.path.clone());
        }
        folders
    }

    pub fn suggest(files: &[FileEntry], confidence: &mut dyn ConfidenceSource) -> Vec<Dependency> {
        let mut dependencies = Vec::new();

        for (folder, paths) in Self::group_by_folder(files) {
            for pair in paths.windows(2) {
                let (source, target) = (&pair[0], &pair[1]);
                dependencies.push(Dependency {
                    id: FormatHelper::sequential_id(ID_PREFIX, dependencies.len() + 1),
                    source: DependencyEndpoint::for_file(source),
                    target: DependencyEndpoint::for_file(target),
                    kind: DependencyKind::Suggested,
                    status: DependencyStatus::Pending,
                    confidence: confidence.next_confidence(),
                    reasons: vec![
                        format!("Files belong to same module: {}", folder),
                        "Shared directory structure".to_string(),
                    ],
                    detected_date: DETECTED_DATE.to_string(),
                    shared_files: vec![source.clone(), target.clone()],
                });
            }
        }

        dependencies
    }
}
