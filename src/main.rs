/*
main.rs

Copyright 2025 Hervé Quatremain

This file is part of Idle Word Search.

Idle Word Search is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Idle Word Search is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Idle Word Search. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

use std::process::ExitCode;

use idle_wordsearch::application::Application;
use idle_wordsearch::cli_options::{self, Command};

fn main() -> ExitCode {
    let options = match cli_options::parse() {
        Command::Exit(ret) => return ExitCode::from(ret),
        Command::Run(options) => options,
    };

    let mut app: Application = match Application::new(options) {
        Ok(app) => app,
        Err(error) => {
            eprintln!("Cannot start the game: {error}");
            return ExitCode::from(1);
        }
    };
    if let Err(error) = app.run() {
        eprintln!("Error: {error}");
        return ExitCode::from(1);
    }
    cli_options::print_summary(app.game());
    ExitCode::SUCCESS
}
