//! Interactive employee menu.
//!
//! Choices 1-4 map to add, view all, search by id and exit. Every field is
//! re-prompted until it validates; end of input behaves like choice 4.

use crate::prompt::Prompter;
use anyhow::Result;
use stafflab_business::{BusinessError, EmployeeStore};
use stafflab_core::input::{parse_age, parse_id, parse_salary, require_text};
use stafflab_core::EmployeeId;
use stafflab_reports::{EmployeeReport, TableFormatter};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const MENU: &str = "\n===== Employee Management =====\n\
                    1. Add Employee\n\
                    2. View All Employees\n\
                    3. Search Employee by ID\n\
                    4. Exit";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    store: EmployeeStore,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: EmployeeStore, input: R, output: W) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> Result<()> {
        info!(records = self.store.len(), "employee menu started");
        loop {
            self.prompter.say(MENU)?;
            let Some(choice) = self.prompter.ask("Enter your choice (1-4): ")? else {
                return self.exit();
            };

            let flow = match choice.trim() {
                "1" => self.add_employee()?,
                "2" => self.view_all()?,
                "3" => self.search()?,
                "4" => return self.exit(),
                other => {
                    debug!(choice = other, "invalid menu choice");
                    self.prompter
                        .say("Invalid choice. Please enter a number between 1 and 4.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return self.exit();
            }
        }
    }

    fn add_employee(&mut self) -> Result<Flow> {
        let store = &self.store;
        let Some(id) = self
            .prompter
            .ask_until("Enter Employee ID: ", |raw| -> Result<EmployeeId, BusinessError> {
                let id = parse_id(raw)?;
                if store.contains(id) {
                    return Err(BusinessError::DuplicateId(id));
                }
                Ok(id)
            })?
        else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self
            .prompter
            .ask_until("Enter Name: ", |raw| require_text("Name", raw))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.prompter.ask_until("Enter Age: ", parse_age)? else {
            return Ok(Flow::Exit);
        };
        let Some(department) = self
            .prompter
            .ask_until("Enter Department: ", |raw| require_text("Department", raw))?
        else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.prompter.ask_until("Enter Salary: ", parse_salary)? else {
            return Ok(Flow::Exit);
        };

        match self.store.create(id, &name, age, &department, salary) {
            Ok(_) => self.prompter.say("Employee added successfully.")?,
            Err(err) => self.prompter.say(format_args!("Error: {err}."))?,
        }
        Ok(Flow::Continue)
    }

    fn view_all(&mut self) -> Result<Flow> {
        if self.store.is_empty() {
            self.prompter.say("No employee records found.")?;
            return Ok(Flow::Continue);
        }

        let report = EmployeeReport::new(self.store.list());
        self.prompter.write_block(&TableFormatter::new().render(&report))?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(id) = self.prompter.ask_until("Enter Employee ID to search: ", parse_id)? else {
            return Ok(Flow::Exit);
        };

        match self.store.find(id) {
            Ok(employee) => {
                let report = EmployeeReport::new([employee]);
                self.prompter.write_block(&TableFormatter::new().render(&report))?;
            }
            Err(err) => self.prompter.say(format_args!("{err}."))?,
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<()> {
        info!(records = self.store.len(), "employee menu exited");
        self.prompter.say("Exiting Employee Management. Goodbye!")
    }

    pub fn into_parts(self) -> (EmployeeStore, W) {
        (self.store, self.prompter.into_output())
    }
}
