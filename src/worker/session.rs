use std::io::Write;

use crate::{
    common::{command::Command, config::Config, error::AppError},
    domain::{account::Account, factory::AccountFactory},
    worker::{
        handlers::{close, deposit, inquiry, open, withdrawal},
        timing::Timing,
    },
};

/// Holds at most one account and routes menu commands to it.
#[derive(Debug)]
pub struct Session {
    factory: AccountFactory,
    account: Option<Account>,
    timing: Timing,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AccountFactory::new(), Timing::new(true))
    }
}

impl Session {
    pub fn new(factory: AccountFactory, timing: Timing) -> Self {
        Self {
            factory,
            account: None,
            timing,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            AccountFactory::starting_at(config.first_account_number),
            Timing::new(config.timing),
        )
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    /// Applies one command, writing its outcome to `out`. `Quit` is a no-op
    /// here; ending the loop is the caller's job.
    pub fn process<W: Write>(&mut self, command: Command, out: &mut W) -> Result<(), AppError> {
        tracing::trace!(?command, "processing command");

        match command {
            Command::Open { initial_balance } => {
                open::handle(&mut self.account, &mut self.factory, initial_balance, out)
            }
            Command::Quit => Ok(()),
            Command::Unknown(choice) => {
                tracing::debug!(%choice, "unknown menu choice");
                writeln!(out, "Invalid choice.")?;
                Ok(())
            }
            Command::Deposit { amount } => self.with_account(out, |acc, timing, out| {
                deposit::handle(acc, amount, timing, out)
            }),
            Command::Withdraw { amount } => self.with_account(out, |acc, timing, out| {
                withdrawal::handle(acc, amount, timing, out)
            }),
            Command::Balance => self.with_account(out, |acc, _, out| inquiry::balance(acc, out)),
            Command::History => self.with_account(out, |acc, _, out| inquiry::history(acc, out)),
            Command::Statement => {
                self.with_account(out, |acc, _, out| inquiry::statement(acc, out))
            }
            Command::Summary => self.with_account(out, |acc, _, out| inquiry::summary(acc, out)),
            Command::Close => self.with_account(out, |acc, _, out| close::handle(acc, out)),
            Command::Status => self.with_account(out, |acc, _, out| inquiry::status(acc, out)),
        }
    }

    fn with_account<W, F>(&mut self, out: &mut W, f: F) -> Result<(), AppError>
    where
        W: Write,
        F: FnOnce(&mut Account, &Timing, &mut W) -> Result<(), AppError>,
    {
        match self.account.as_mut() {
            Some(acc) => f(acc, &self.timing, out),
            None => {
                writeln!(out, "Open an account first.")?;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::money::Money;

    fn run(session: &mut Session, command: Command) -> String {
        let mut out = Vec::new();
        session.process(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn commands_need_an_account_first() {
        let mut session = Session::default();

        for command in [
            Command::Deposit {
                amount: Some(Money::new(1)),
            },
            Command::Withdraw { amount: None },
            Command::Balance,
            Command::History,
            Command::Statement,
            Command::Summary,
            Command::Close,
            Command::Status,
        ] {
            assert_eq!(run(&mut session, command), "Open an account first.\n");
        }
        assert!(session.account().is_none());
    }

    #[test]
    fn unknown_choice_and_quit() {
        let mut session = Session::default();

        assert_eq!(
            run(&mut session, Command::Unknown("x".into())),
            "Invalid choice.\n"
        );
        assert_eq!(run(&mut session, Command::Quit), "");
    }

    #[test]
    fn routes_to_the_current_account() {
        let mut session = Session::new(AccountFactory::starting_at(42), Timing::disabled());

        run(
            &mut session,
            Command::Open {
                initial_balance: Some(Money::new(10_000)),
            },
        );
        assert_eq!(
            run(
                &mut session,
                Command::Deposit {
                    amount: Some(Money::new(5000))
                }
            ),
            "Deposited 50.00. Balance: 150.00\n"
        );
        assert_eq!(
            run(&mut session, Command::Balance),
            "Current balance: 150.00\n"
        );

        let acc = session.account().expect("account open");
        assert_eq!(acc.number(), 42);
        assert_eq!(acc.transaction_count(), 1);
    }

    #[test]
    fn from_config_honours_first_number() {
        let config = Config {
            first_account_number: 9000,
            timing: false,
            ..Config::default()
        };
        let mut session = Session::from_config(&config);

        assert_eq!(
            run(
                &mut session,
                Command::Open {
                    initial_balance: Some(Money::zero())
                }
            ),
            "Account opened. Number: 9000. Balance: 0.00\n"
        );
    }

    #[test]
    fn closed_account_keeps_answering_every_command() {
        let mut session = Session::new(AccountFactory::new(), Timing::disabled());
        run(
            &mut session,
            Command::Open {
                initial_balance: Some(Money::new(100)),
            },
        );
        run(&mut session, Command::Close);

        assert_eq!(
            run(&mut session, Command::Withdraw { amount: Some(Money::new(1)) }),
            "Withdrawal denied: account is closed.\n"
        );
        assert_eq!(run(&mut session, Command::Status), "Account is closed.\n");
        assert_eq!(run(&mut session, Command::History), "(no transactions)\n");
        assert_eq!(run(&mut session, Command::Close), "Account is already closed.\n");
    }
}
