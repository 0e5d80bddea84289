// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::error::Error;

use clap::{value_parser, Arg, Command};
use seamcarve::{energy_to_image, Direction, SeamCarver};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Content-aware image resizing by seam removal")
        .arg(
            Arg::new("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Where to write the resized image")
                .required(true),
        )
        .arg(
            Arg::new("direction")
                .short('d')
                .long("direction")
                .help("Seam direction: vertical seams narrow the image, horizontal seams shorten it")
                .default_value("vertical"),
        )
        .arg(
            Arg::new("seams")
                .short('n')
                .long("seams")
                .help("How many seams to remove")
                .value_parser(value_parser!(u32))
                .default_value("1"),
        )
        .arg(
            Arg::new("energy-out")
                .long("energy-out")
                .help("Also write the last energy map, with the removed seam marked"),
        )
        .get_matches();

    let direction: Direction = matches.get_one::<String>("direction").unwrap().parse()?;
    let seams = *matches.get_one::<u32>("seams").unwrap();
    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();

    let source = image::open(input)?.to_rgb8();

    let mut last_energy = None;
    let carved = SeamCarver::new(&source).carve_with_observer(direction, seams, |_, _, energy| {
        last_energy = Some(energy.clone());
    })?;

    if carved.completed < carved.requested {
        eprintln!(
            "stopped after {} of {} seams; the image cannot shrink further",
            carved.completed, carved.requested
        );
    }
    carved.image.save(output)?;

    if let Some(path) = matches.get_one::<String>("energy-out") {
        match last_energy {
            Some(energy) => energy_to_image(&energy).save(path)?,
            None => eprintln!("no seams were removed; skipping {path}"),
        }
    }

    Ok(())
}
