//! CSV trajectory loader.
//!
//! Reads the simulator's output table (header row
//! `time,id,mass,x,y,z,vx,vy,vz`) and builds a [`TrackSet`]. Any load
//! failure is fatal: there is nothing sensible to render from a partial
//! or malformed dataset.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::data::{Sample, TrackSet};

/// Fatal load failure. These propagate out of `main` untouched; no
/// recovery is attempted and no output is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed trajectory data: {0}")]
    Malformed(#[from] csv::Error),
}

/// Load and partition the trajectory file at `path`.
pub fn load_tracks(path: impl AsRef<Path>) -> Result<TrackSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Reading trajectory file");
    read_tracks(file)
}

/// Parse CSV rows from any reader. Split out from [`load_tracks`] so
/// tests can feed inline data.
pub fn read_tracks(reader: impl Read) -> Result<TrackSet, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);
    let mut tracks = TrackSet::new();

    for row in csv.deserialize() {
        let sample: Sample = row?;
        tracks.push(sample);
    }

    Ok(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "\
time,id,mass,x,y,z,vx,vy,vz
0,0,1.989e30,0,0,0,0,0,0
0,1,5.972e24,1.496e11,0,0,0,29780,0
86400,0,1.989e30,10,0,0,0,0,0
86400,1,5.972e24,1.495e11,2.57e9,0,-500,29770,0
";

    #[test]
    fn test_read_well_formed() {
        let tracks = read_tracks(WELL_FORMED.as_bytes()).unwrap();

        assert_eq!(tracks.track_count(), 2);
        assert_eq!(tracks.frame_count(), 2);

        let sun = tracks.get(0).unwrap();
        assert_eq!(sun.display_mass(), 1.989e30);
        assert_eq!(sun.xs, vec![0.0, 10.0]);

        let earth = tracks.get(1).unwrap();
        assert_eq!(earth.vys, vec![29780.0, 29770.0]);
    }

    #[test]
    fn test_track_count_matches_unique_ids() {
        let data = "\
time,id,mass,x,y,z,vx,vy,vz
0,3,1,0,0,0,0,0,0
0,5,1,0,0,0,0,0,0
1,3,1,0,0,0,0,0,0
1,5,1,0,0,0,0,0,0
2,3,1,0,0,0,0,0,0
";
        let tracks = read_tracks(data.as_bytes()).unwrap();
        assert_eq!(tracks.track_count(), 2);
    }

    #[test]
    fn test_ragged_tracks_load() {
        // Uneven track lengths are a renderer concern, not a load error
        let data = "\
time,id,mass,x,y,z,vx,vy,vz
0,0,1,0,0,0,0,0,0
0,1,1,0,0,0,0,0,0
1,0,1,0,0,0,0,0,0
";
        let tracks = read_tracks(data.as_bytes()).unwrap();
        assert_eq!(tracks.get(0).unwrap().len(), 2);
        assert_eq!(tracks.get(1).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_column_fails() {
        let data = "\
time,id,x,y,z,vx,vy,vz
0,0,0,0,0,0,0,0
";
        let err = read_tracks(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_non_numeric_field_fails() {
        let data = "\
time,id,mass,x,y,z,vx,vy,vz
0,0,heavy,0,0,0,0,0,0
";
        let err = read_tracks(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_short_row_fails() {
        let data = "\
time,id,mass,x,y,z,vx,vy,vz
0,0,1,0,0
";
        assert!(read_tracks(data.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_tracks("data/definitely-not-here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
