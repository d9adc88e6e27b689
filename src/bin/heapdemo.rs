use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heap_algorithms::median::MedianTracker;
use heap_algorithms::merge::merge_k_sorted;
use heap_algorithms::select::{top_k, top_k_frequent};
use heap_algorithms::sort::heap_sort;
use heap_algorithms::{BinaryHeap, MinOrder};
use log::info;

/// Demonstrations of binary heaps and the algorithms built on them
#[derive(Debug, Parser)]
#[command(name = "heapdemo")]
#[command(about = "Run heap-based algorithms over integers given on the command line.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build a min-heap in one pass and extract every element
    #[command(arg_required_else_help = true)]
    Heapify {
        /// Values to heapify
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Heap sort the values in place
    #[command(arg_required_else_help = true)]
    Sort {
        /// Sort largest first
        #[arg(short, long)]
        descending: bool,

        /// Values to sort
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Select the k largest (or smallest) values
    #[command(arg_required_else_help = true)]
    TopK {
        /// How many values to keep
        #[arg(short, long)]
        k: usize,

        /// Keep the smallest values instead of the largest
        #[arg(short, long)]
        smallest: bool,

        /// Values to select from
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Select the k most frequent values
    #[command(arg_required_else_help = true)]
    Frequent {
        /// How many values to keep
        #[arg(short, long)]
        k: usize,

        /// Values to count
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Merge sorted runs, each given as comma-separated integers
    #[command(arg_required_else_help = true)]
    Merge {
        /// Sorted runs such as `1,4,7 2,5,8`
        #[arg(num_args(1..), allow_negative_numbers = true)]
        runs: Vec<String>,
    },

    /// Print the running median after each value
    #[command(arg_required_else_help = true)]
    Median {
        /// Stream of values
        #[arg(num_args(1..), allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

fn parse_run(run: &str) -> Result<Vec<i64>> {
    run.split(',')
        .filter(|field| !field.trim().is_empty())
        .map(|field| {
            field
                .trim()
                .parse::<i64>()
                .with_context(|| format!("invalid integer {:?} in run {:?}", field, run))
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Heapify { values } => {
            let heap = BinaryHeap::heapify(values, MinOrder);
            println!("heap:      {:?}", heap.as_slice());
            println!("extracted: {:?}", heap.into_sorted_vec());
        }
        Commands::Sort {
            descending,
            mut values,
        } => {
            heap_sort(&mut values, !descending);
            println!("{:?}", values);
        }
        Commands::TopK {
            k,
            smallest,
            values,
        } => {
            let mut selected = top_k(values, k, !smallest);
            selected.sort();
            println!("{:?}", selected);
        }
        Commands::Frequent { k, values } => {
            println!("{:?}", top_k_frequent(values, k));
        }
        Commands::Merge { runs } => {
            let runs = runs
                .iter()
                .map(|run| parse_run(run))
                .collect::<Result<Vec<_>>>()?;
            info!("merging {} runs", runs.len());
            println!("{:?}", merge_k_sorted(&runs));
        }
        Commands::Median { values } => {
            let mut tracker = MedianTracker::new();
            for value in values {
                tracker.add_num(value);
                let median = tracker.find_median()?;
                println!("{:>12} -> {}", value, median);
            }
        }
    }
    Ok(())
}
