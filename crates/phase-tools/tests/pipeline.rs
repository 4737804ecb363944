// File: crates/phase-tools/tests/pipeline.rs
// Purpose: Generator output written to disk, read back, gridded and rendered.

use std::fs::File;
use std::io::BufWriter;

use phase_core::{build_phase_diagram, generate, read_dataset, write_dataset, GridAxis, GridSpec};
use phase_render_skia::{DiagramChart, RenderOptions};

#[test]
fn generated_file_renders() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("pipeline");
    std::fs::create_dir_all(&dir).unwrap();
    let table = dir.join("fake_diagram_with_3_phases.out");

    let spec = GridSpec {
        temperature: GridAxis::new(0.0, 500.0, 10.0),
        pressure: GridAxis::new(0.0, 30.0, 1.0),
    };
    let data = generate(3, &spec).expect("generate");
    write_dataset(BufWriter::new(File::create(&table).unwrap()), &data).expect("write");

    let reread = read_dataset(&table).expect("read");
    assert_eq!(reread.len(), 51 * 31);

    let diagram = build_phase_diagram(&reread).expect("diagram");
    assert_eq!(diagram.legend.names(), ["test1", "test2", "test3"]);
    assert_eq!((diagram.grid.width(), diagram.grid.height()), (51, 31));

    let out = dir.join("diagram.png");
    DiagramChart::new(&diagram)
        .render_to_path(&RenderOptions::default(), &out)
        .expect("render");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
