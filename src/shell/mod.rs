//! Interactive menu driver.
//!
//! A thin line-oriented front end over [`CustomerService`]. It reads from any
//! `BufRead` and writes to any `Write`, so sessions can be scripted in tests.
//! Every prompt that fails validation re-asks only that field.

use crate::domain::{is_valid_email, is_valid_name, is_valid_phone};
use crate::registry::{CustomerUpdate, Registry};
use crate::services::CustomerService;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Name entered at the add prompt to stop adding customers.
const DONE_KEYWORD: &str = "done";

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewList,
    Add,
    Search,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::ViewList),
            2 => Some(Self::Add),
            3 => Some(Self::Search),
            4 => Some(Self::Edit),
            5 => Some(Self::Delete),
            6 => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Menu session bound to one input and one output stream.
pub struct Shell<R, W> {
    service: CustomerService,
    io: Console<R, W>,
}

struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print `message` and read one line without its terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Ask until `accept` returns `None`, printing its message otherwise.
    fn prompt_until(
        &mut self,
        message: &str,
        mut accept: impl FnMut(&str) -> Option<&'static str>,
    ) -> io::Result<Option<String>> {
        loop {
            let Some(value) = self.prompt(message)? else {
                return Ok(None);
            };
            match accept(&value) {
                None => return Ok(Some(value)),
                Some(complaint) => writeln!(self.output, "{}", complaint)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(service: CustomerService, input: R, output: W) -> Self {
        Self {
            service,
            io: Console { input, output },
        }
    }

    /// Run the menu until the user exits or input ends.
    ///
    /// The final save happens on every path, including a console I/O failure,
    /// before the registry or the error is handed back.
    pub fn run(mut self) -> io::Result<Registry> {
        let session = self.menu_loop();
        if let Err(ref e) = session {
            warn!(error = %e, "Console I/O failed, saving before exit");
        }
        let registry = self.service.shutdown();
        session.map(|()| registry)
    }

    fn menu_loop(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.io.prompt("Enter your choice: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::ViewList) => self.view_list()?,
                Some(MenuChoice::Add) => self.add_customers()?,
                Some(MenuChoice::Search) => self.search_customer()?,
                Some(MenuChoice::Edit) => self.edit_customer()?,
                Some(MenuChoice::Delete) => self.delete_customer()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    writeln!(self.io.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.io.output, "Exiting...")?;
        self.io.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.io.output, "Customer Management System")?;
        writeln!(self.io.output, "1. View Customer List")?;
        writeln!(self.io.output, "2. Add Customer")?;
        writeln!(self.io.output, "3. Search Customer by Phone Number")?;
        writeln!(self.io.output, "4. Edit Customer Information")?;
        writeln!(self.io.output, "5. Delete Customer")?;
        writeln!(self.io.output, "6. Exit")
    }

    fn view_list(&mut self) -> io::Result<Flow> {
        let customers = self.service.list();
        if customers.is_empty() {
            writeln!(self.io.output, "No customers found.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.io.output, "Customer List:")?;
        for customer in customers {
            writeln!(self.io.output, "{}", customer)?;
        }
        Ok(Flow::Continue)
    }

    fn add_customers(&mut self) -> io::Result<Flow> {
        loop {
            let Some(name) = self.io.prompt_until(
                "Enter customer name (or type 'done' to finish adding customers): ",
                |name| (!is_valid_name(name)).then_some("Invalid name format. Please try again."),
            )?
            else {
                return Ok(Flow::Exit);
            };
            if name.eq_ignore_ascii_case(DONE_KEYWORD) {
                return Ok(Flow::Continue);
            }

            let Some(email) = self.io.prompt_until("Enter customer email: ", |email| {
                (!is_valid_email(email)).then_some("Invalid email format.")
            })?
            else {
                return Ok(Flow::Exit);
            };

            let registry = self.service.registry();
            let Some(phone) = self.io.prompt_until("Enter customer phone number: ", |phone| {
                phone_complaint(registry, phone, None)
            })?
            else {
                return Ok(Flow::Exit);
            };

            match self.service.add(&name, &email, &phone) {
                Ok(_) => writeln!(self.io.output, "Customer added successfully.")?,
                Err(e) => writeln!(self.io.output, "{}", e)?,
            }
        }
    }

    fn search_customer(&mut self) -> io::Result<Flow> {
        let Some(phone) = self.io.prompt("Enter phone number to search: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.find_by_phone(&phone).map(|c| c.to_string()) {
            Ok(customer) => {
                writeln!(self.io.output, "Customer found:")?;
                writeln!(self.io.output, "{}", customer)?;
            }
            Err(_) => self.print_not_found(&phone)?,
        }
        Ok(Flow::Continue)
    }

    fn edit_customer(&mut self) -> io::Result<Flow> {
        let Some(phone) = self.io.prompt("Enter phone number of customer to edit: ")? else {
            return Ok(Flow::Exit);
        };
        if !self.service.registry().contains(&phone) {
            self.print_not_found(&phone)?;
            return Ok(Flow::Continue);
        }

        writeln!(self.io.output, "Enter new information for customer:")?;
        let Some(name) = self.io.prompt_until("New name (leave empty to keep current): ", |name| {
            (!name.is_empty() && !is_valid_name(name))
                .then_some("Invalid name format. Please try again.")
        })?
        else {
            return Ok(Flow::Exit);
        };

        let Some(email) = self.io.prompt_until("New email (leave empty to keep current): ", |email| {
            (!email.is_empty() && !is_valid_email(email)).then_some("Invalid email format.")
        })?
        else {
            return Ok(Flow::Exit);
        };

        let registry = self.service.registry();
        let Some(new_phone) = self.io.prompt_until(
            "New phone number (leave empty to keep current): ",
            |candidate| {
                if candidate.is_empty() {
                    None
                } else {
                    phone_complaint(registry, candidate, Some(phone.as_str()))
                }
            },
        )?
        else {
            return Ok(Flow::Exit);
        };
        if new_phone.is_empty() {
            writeln!(self.io.output, "Keeping the current phone number.")?;
        }

        let changes = CustomerUpdate {
            name: Some(name),
            email: Some(email),
            phone: Some(new_phone),
        };
        match self.service.update(&phone, changes) {
            Ok(_) => writeln!(self.io.output, "Customer information updated successfully.")?,
            Err(e) => writeln!(self.io.output, "{}", e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_customer(&mut self) -> io::Result<Flow> {
        let Some(phone) = self.io.prompt("Enter phone number of customer to delete: ")? else {
            return Ok(Flow::Exit);
        };

        match self.service.delete(&phone) {
            Ok(_) => writeln!(self.io.output, "Customer deleted successfully.")?,
            Err(_) => self.print_not_found(&phone)?,
        }
        Ok(Flow::Continue)
    }

    fn print_not_found(&mut self, phone: &str) -> io::Result<()> {
        writeln!(
            self.io.output,
            "Customer with phone number {} not found.",
            phone
        )
    }
}

/// Why `phone` cannot be used as a key, if it cannot. `current` is the key of
/// the record being edited, which the record may keep.
fn phone_complaint(registry: &Registry, phone: &str, current: Option<&str>) -> Option<&'static str> {
    if !is_valid_phone(phone) {
        return Some("Invalid phone number format.");
    }
    if current != Some(phone) && registry.contains(phone) {
        return Some(
            "Phone number already exists for another customer. Please choose a different one.",
        );
    }
    None
}
