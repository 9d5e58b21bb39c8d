use super::VERSION;
use clap::{App, Arg};
use std::path::PathBuf;

/// Takes the CLI arguments that control the plotting of the coordinate path.
pub fn parse_cli() -> (PathBuf, PathBuf, usize, String) {
    let arg_txtin = Arg::with_name("input_file")
        .help("name of the coordinate text file, one x,y pair per line")
        .short("f")
        .long("file")
        .takes_value(true)
        .required(true)
        .default_value("coordinates.txt");
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("name of the output svg file")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    let arg_label_every = Arg::with_name("label_every")
        .help("annotate every nth point with its (x,y) text, 0 disables the labels")
        .short("l")
        .long("label-every")
        .takes_value(true)
        .default_value("1");
    let arg_title = Arg::with_name("title")
        .help("title of the plot")
        .short("t")
        .long("title")
        .takes_value(true)
        .default_value("Coordinate path");
    let cli_args = App::new("Pathplot")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot a 2D integer coordinate path")
        .arg(arg_txtin)
        .arg(arg_svgout)
        .arg(arg_label_every)
        .arg(arg_title)
        .get_matches();
    let txtin = PathBuf::from(cli_args.value_of("input_file").unwrap_or_default());
    let svgout = match cli_args.value_of("output_svgfile") {
        Some(p) => PathBuf::from(p),
        None => {
            let mut svgout = txtin.clone();
            svgout.set_extension("svg");
            svgout
        }
    };
    let label_every = cli_args
        .value_of("label_every")
        .unwrap_or_default()
        .parse::<usize>()
        .unwrap();
    let title = String::from(cli_args.value_of("title").unwrap_or_default());
    return (txtin, svgout, label_every, title);
}
