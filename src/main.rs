use std::env;
use std::process;

use vmd_motion::{FrameKind, VmdMotion};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!(
            "Usage: {} <path-to-vmd-file> [--out <path>] [--csv bone|morph]",
            args[0]
        );
        process::exit(1);
    }

    let vmd_path = &args[1];
    let mut out_path = String::from("output.vmd");
    let mut csv_track: Option<String> = None;

    // Parse trailing flags
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--out" => {
                if let Some(path) = args.get(i + 1) {
                    out_path = path.clone();
                    i += 2;
                } else {
                    eprintln!("ERROR: --out flag requires an argument.");
                    process::exit(1);
                }
            }
            "--csv" => match args.get(i + 1) {
                Some(track) if track == "bone" || track == "morph" => {
                    csv_track = Some(track.clone());
                    i += 2;
                }
                _ => {
                    eprintln!("ERROR: --csv expects `bone` or `morph`.");
                    process::exit(1);
                }
            },
            other => {
                eprintln!("ERROR: unknown argument {}", other);
                process::exit(1);
            }
        }
    }

    println!("Reading VMD file: {}", vmd_path);
    println!("{}", "=".repeat(60));

    let mut motion = match VmdMotion::load(vmd_path) {
        Ok(motion) => motion,
        Err(e) => {
            eprintln!("\nERROR: Failed to read VMD file");
            eprintln!("  {}", e);
            process::exit(1);
        }
    };

    motion.sort_all_frames();

    println!("\nMotion Information:");
    println!("  Model: {}", motion.header.model_name_text());
    for kind in FrameKind::ALL {
        println!("  {:<7} frames: {}", kind, motion.frame_count(kind));
    }
    if let Some(last) = motion.max_frame() {
        println!("  Last frame: {}", last);
    }

    match csv_track.as_deref() {
        Some("bone") => {
            println!("\nname,frame,x,y,z,qx,qy,qz,qw");
            for row in motion.iter_bone_rows() {
                println!(
                    "{},{},{},{},{},{},{},{},{}",
                    row.name,
                    row.frame,
                    row.position[0],
                    row.position[1],
                    row.position[2],
                    row.rotation[0],
                    row.rotation[1],
                    row.rotation[2],
                    row.rotation[3]
                );
            }
        }
        Some("morph") => {
            println!("\nname,frame,weight");
            for row in motion.iter_morph_rows() {
                println!("{},{},{}", row.name, row.frame, row.weight);
            }
        }
        _ => {}
    }

    if let Err(e) = motion.save(&out_path) {
        eprintln!("\nERROR: Failed to write {}", out_path);
        eprintln!("  {}", e);
        process::exit(1);
    }
    println!("\nSorted motion written to {}", out_path);
}
