use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum StaffCommands {
    /// Add a staff member
    Add {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Display name, unique within the store
        #[arg(long)]
        name: String,
    },

    /// List staff members by name
    List {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a staff member that has no roster or sales rows
    Remove {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Staff ID to remove
        #[arg(long)]
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ImportCommands {
    /// Import a staff_name,date,shift_hours CSV
    Roster {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// CSV file to read
        #[arg(long)]
        file: PathBuf,
    },

    /// Import a date,total_budget,total_hours CSV
    Budget {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// CSV file to read
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Per-staff records for one day
    Day {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Monthly totals per staff member and for the store
    Month {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        month: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Weekly running totals for one staff member
    Tracker {
        /// Data directory for the database
        #[arg(long, default_value = "./data")]
        data_dir: String,

        /// Staff ID to track
        #[arg(long)]
        staff_id: i64,

        #[arg(long)]
        year: i32,

        #[arg(long)]
        month: u32,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
