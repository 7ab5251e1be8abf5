use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use disc_ics::sim::units::RADIUS_TOLERANCE;
use disc_ics::{BodySet, Error, InitialParameters, RadialProfile};

/// A path in the system temp directory that no other test uses.
fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("disc_ics-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = fs::remove_file(&path);
    path
}

fn params(body_count: u32, output_path: PathBuf) -> InitialParameters {
    InitialParameters {
        body_count,
        output_path,
        seed: Some(42),
        ..Default::default()
    }
}

fn generate_file(params: &InitialParameters) -> Result<String, Error> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed.unwrap_or(0));
    BodySet::generate(params, &mut rng)?.write_to_file(&params.output_path)?;
    Ok(fs::read_to_string(&params.output_path).unwrap())
}

fn parse_line(line: &str) -> Vec<f64> {
    line.split(' ').map(|token| token.parse().unwrap()).collect()
}

// ==================================================================================
// File layout
// ==================================================================================

#[test]
fn count_line_matches_number_of_records() {
    for body_count in [1, 2, 3, 17, 512] {
        let path = scratch_file(&format!("count-{}.txt", body_count));
        let content = generate_file(&params(body_count, path)).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], body_count.to_string());
        assert_eq!(lines.len(), body_count as usize + 1);
        assert_eq!(*lines.last().unwrap(), "1e24 0 0 0 0 0 0");
    }
}

#[test]
fn three_body_file() {
    let path = scratch_file("three.txt");
    let content = generate_file(&params(3, path)).unwrap();
    println!("{}", content);
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "3");
    for line in lines[1..3].iter() {
        let values = parse_line(line);
        let (m, x, y, z, vx, vy, vz) = (
            values[0], values[1], values[2], values[3], values[4], values[5], values[6],
        );
        assert!((1e10..=1e15).contains(&m));
        let radius = (x * x + z * z).sqrt();
        assert!(radius >= 1e10 * (1. - RADIUS_TOLERANCE));
        assert!(radius <= 1e11 * (1. + RADIUS_TOLERANCE));
        assert!((-1e10..=1e10).contains(&y));
        assert!((-100.0..=100.0).contains(&vx));
        assert_eq!(vy, 0.);
        assert!((-100.0..=100.0).contains(&vz));
    }
    assert_eq!(lines[3], "1e24 0 0 0 0 0 0");
}

#[test]
fn single_body_file_holds_only_the_central_body() {
    let path = scratch_file("single.txt");
    let content = generate_file(&params(1, path)).unwrap();
    assert_eq!(content, "1\n1e24 0 0 0 0 0 0\n");
}

#[test]
fn existing_file_is_overwritten() {
    let path = scratch_file("overwrite.txt");
    fs::write(&path, "stale content that is much longer than the new file\n".repeat(10)).unwrap();
    let content = generate_file(&params(1, path)).unwrap();
    assert_eq!(content, "1\n1e24 0 0 0 0 0 0\n");
}

// ==================================================================================
// Determinism and ranges
// ==================================================================================

#[test]
fn same_seed_writes_identical_files() {
    let first = generate_file(&params(128, scratch_file("seeded-a.txt"))).unwrap();
    let second = generate_file(&params(128, scratch_file("seeded-b.txt"))).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unseeded_files_differ_but_keep_ranges() {
    let mut contents = vec![];
    for (i, profile) in [RadialProfile::Linear, RadialProfile::UniformArea]
        .iter()
        .enumerate()
    {
        let params = InitialParameters {
            body_count: 200,
            output_path: scratch_file(&format!("unseeded-{}.txt", i)),
            radial_profile: *profile,
            ..Default::default()
        };
        BodySet::generate(&params, &mut rand::thread_rng())
            .unwrap()
            .write_to_file(&params.output_path)
            .unwrap();
        let system = BodySet::read_from_file(&params.output_path).unwrap();
        assert_eq!(system.len(), 200);
        assert!(system.inspect(&params).is_clean());
        contents.push(fs::read_to_string(&params.output_path).unwrap());
    }
    assert_ne!(contents[0], contents[1]);
}

#[test]
fn written_file_reads_back_exactly() {
    let params = params(300, scratch_file("read-back.txt"));
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let system = BodySet::generate(&params, &mut rng).unwrap();
    system.write_to_file(&params.output_path).unwrap();
    assert_eq!(BodySet::read_from_file(&params.output_path).unwrap(), system);
}

// ==================================================================================
// Failures
// ==================================================================================

#[test]
fn zero_bodies_create_no_file() {
    let path = scratch_file("zero.txt");
    let result = generate_file(&params(0, path.clone()));
    assert!(matches!(result, Err(Error::InvalidParameters(_))));
    assert!(!path.exists());
}

#[test]
fn missing_directory_is_an_io_error() {
    let path = scratch_file("unused.txt")
        .with_file_name("no-such-directory")
        .join("input.txt");
    let result = generate_file(&params(8, path.clone()));
    assert!(matches!(result, Err(Error::Io(_))));
    assert!(!path.exists());
}

#[test]
fn parameters_load_from_yaml() {
    let config = scratch_file("params.yaml");
    let output = scratch_file("from-yaml.txt");
    fs::write(
        &config,
        format!(
            "body_count: 5\noutput_path: {}\nseed: 99\nradial_profile: uniform-area\n",
            output.display()
        ),
    )
    .unwrap();
    let params = InitialParameters::from_yaml_file(&config).unwrap();
    assert_eq!(params.body_count, 5);
    assert_eq!(params.output_path, output);
    let content = generate_file(&params).unwrap();
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn broken_yaml_is_a_config_error() {
    let config = scratch_file("broken.yaml");
    fs::write(&config, "body_count: many\n").unwrap();
    assert!(matches!(
        InitialParameters::from_yaml_file(&config),
        Err(Error::Config(_))
    ));
}
