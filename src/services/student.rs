//! Student service
//!
//! Provides the roster operations the shell invokes: adding students,
//! enrolling them in courses, checking balances, taking fee payments,
//! and reporting status.

use tracing::debug;

use crate::error::{RosterError, RosterResult};
use crate::models::{Money, Student, StudentId};
use crate::storage::Roster;

/// Service for student management
pub struct StudentService<'a> {
    roster: &'a mut Roster,
}

/// A student's balance, as shown by "View a student balance"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSummary {
    pub name: String,
    pub balance: Money,
}

/// Outcome of a fee payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub name: String,
    /// Amount deducted, exactly as requested
    pub amount: Money,
    /// Balance after the payment
    pub balance: Money,
}

impl<'a> StudentService<'a> {
    /// Create a new student service
    pub fn new(roster: &'a mut Roster) -> Self {
        Self { roster }
    }

    /// Add a new student. Any name is accepted, including an empty one.
    pub fn create(&mut self, name: &str) -> RosterResult<Student> {
        let student = self.roster.create_student(name)?.clone();
        debug!(id = %student.id, name = %student.name, "student created");
        Ok(student)
    }

    /// Get a student by ID
    pub fn find(&self, id: StudentId) -> Option<&Student> {
        self.roster.find_by_id(id)
    }

    /// Turn a typed id into a `StudentId`
    ///
    /// Text that does not start with a number can never match a record, so
    /// it is reported the same way as an unknown id.
    pub fn resolve(&self, input: &str) -> RosterResult<StudentId> {
        StudentId::parse_lenient(input).ok_or_else(|| {
            debug!(input, "student id did not parse");
            RosterError::student_not_found(input.trim())
        })
    }

    /// Enroll a student in a course
    pub fn enroll(&mut self, id: StudentId, course: &str) -> RosterResult<Student> {
        let student = self.get_mut(id)?;
        student.enroll(course);
        debug!(%id, course, total = student.courses.len(), "student enrolled");
        Ok(student.clone())
    }

    /// Get a student's current balance
    pub fn balance(&self, id: StudentId) -> RosterResult<BalanceSummary> {
        let student = self.get(id)?;
        Ok(BalanceSummary {
            name: student.name.clone(),
            balance: student.balance,
        })
    }

    /// Deduct a fee payment from a student's balance
    ///
    /// The amount is not checked for sign and the balance has no floor.
    /// A payment that would push the balance past the representable range
    /// is refused and the balance is left as it was.
    pub fn pay_fees(&mut self, id: StudentId, amount: Money) -> RosterResult<PaymentReceipt> {
        let student = self.get_mut(id)?;
        let balance = student.pay_fees(amount).ok_or_else(|| {
            RosterError::Validation(format!("Balance for {} is out of range", student.name))
        })?;
        debug!(%id, %amount, %balance, "fees paid");
        Ok(PaymentReceipt {
            name: student.name.clone(),
            amount,
            balance,
        })
    }

    /// Get a snapshot of a student's full record
    pub fn status(&self, id: StudentId) -> RosterResult<Student> {
        self.get(id).cloned()
    }

    fn get(&self, id: StudentId) -> RosterResult<&Student> {
        self.roster.find_by_id(id).ok_or_else(|| {
            debug!(%id, "student not found");
            RosterError::student_not_found(id.to_string())
        })
    }

    fn get_mut(&mut self, id: StudentId) -> RosterResult<&mut Student> {
        self.roster.find_by_id_mut(id).ok_or_else(|| {
            debug!(%id, "student not found");
            RosterError::student_not_found(id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: u32) -> StudentId {
        StudentId::new(value)
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);

        let ada = service.create("Ada").unwrap();
        let bob = service.create("Bob").unwrap();
        let blank = service.create("").unwrap();

        assert_eq!(ada.id, id(10000));
        assert_eq!(bob.id, id(10001));
        assert_eq!(blank.id, id(10002));
        assert_eq!(blank.name, "");
    }

    #[test]
    fn test_find_returns_created_record() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);

        let ada = service.create("Ada").unwrap();
        assert_eq!(service.find(ada.id), Some(&ada));
        assert!(service.find(id(10001)).is_none());
    }

    #[test]
    fn test_enroll_appends_in_order() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        let ada = service.create("Ada").unwrap();

        service.enroll(ada.id, "Math").unwrap();
        let updated = service.enroll(ada.id, "Art").unwrap();

        assert_eq!(updated.courses, vec!["Math", "Art"]);
        assert_eq!(service.status(ada.id).unwrap().courses, vec!["Math", "Art"]);
    }

    #[test]
    fn test_pay_fees_is_linear() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        let ada = service.create("Ada").unwrap();

        let first = service.pay_fees(ada.id, Money::from_dollars(60)).unwrap();
        assert_eq!(first.amount, Money::from_dollars(60));
        assert_eq!(first.balance, Money::from_dollars(40));

        let second = service.pay_fees(ada.id, Money::from_dollars(75)).unwrap();
        assert_eq!(second.balance, Money::from_dollars(-35));
        assert_eq!(
            service.balance(ada.id).unwrap().balance,
            Money::from_dollars(100 - 60 - 75)
        );
    }

    #[test]
    fn test_pay_negative_amount_raises_balance() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        let ada = service.create("Ada").unwrap();

        let receipt = service.pay_fees(ada.id, Money::from_dollars(-20)).unwrap();
        assert_eq!(receipt.balance, Money::from_dollars(120));
    }

    #[test]
    fn test_pay_fees_out_of_range_is_refused() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        let ada = service.create("Ada").unwrap();
        let huge = Money::from_dollars(1_000_000_000_000);

        for _ in 0..9 {
            service.pay_fees(ada.id, huge).unwrap();
        }
        let before = service.balance(ada.id).unwrap().balance;

        let err = service.pay_fees(ada.id, huge).unwrap_err();
        assert!(matches!(err, RosterError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Balance for Ada is out of range");
        assert_eq!(service.balance(ada.id).unwrap().balance, before);
    }

    #[test]
    fn test_create_fails_when_ids_run_out() {
        let settings = crate::config::Settings::default().with_first_id(id(u32::MAX - 1));
        let mut roster = Roster::with_settings(&settings);
        let mut service = StudentService::new(&mut roster);

        assert_eq!(service.create("Ada").unwrap().id, id(u32::MAX - 1));
        assert_eq!(service.create("Bob").unwrap().id, id(u32::MAX));
        assert!(matches!(
            service.create("Cy"),
            Err(RosterError::IdsExhausted { .. })
        ));
        assert!(service.find(id(u32::MAX)).is_some());
    }

    #[test]
    fn test_fresh_student_status() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        service.create("Ada").unwrap();

        let status = service.status(id(10000)).unwrap();
        assert_eq!(status.id, id(10000));
        assert_eq!(status.name, "Ada");
        assert_eq!(status.courses_joined(), "");
        assert_eq!(status.balance, Money::from_dollars(100));
    }

    #[test]
    fn test_unknown_id_is_not_found_everywhere() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);
        let missing = id(99999);

        assert!(service.enroll(missing, "Math").unwrap_err().is_not_found());
        assert!(service.balance(missing).unwrap_err().is_not_found());
        assert!(service
            .pay_fees(missing, Money::from_dollars(10))
            .unwrap_err()
            .is_not_found());
        assert!(service.status(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_resolve() {
        let mut roster = Roster::new();
        let service = StudentService::new(&mut roster);

        assert_eq!(service.resolve("10000").unwrap(), id(10000));
        assert_eq!(service.resolve(" 10001xyz").unwrap(), id(10001));

        let err = service.resolve("abc").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Student not found: abc");
    }

    #[test]
    fn test_two_student_scenario() {
        let mut roster = Roster::new();
        let mut service = StudentService::new(&mut roster);

        assert_eq!(service.create("Ada").unwrap().id, id(10000));
        assert_eq!(service.create("Bob").unwrap().id, id(10001));
        service.enroll(id(10000), "Physics").unwrap();
        service.pay_fees(id(10000), Money::from_dollars(30)).unwrap();

        let ada = service.status(id(10000)).unwrap();
        assert_eq!(ada.name, "Ada");
        assert_eq!(ada.courses_joined(), "Physics");
        assert_eq!(ada.balance, Money::from_dollars(70));

        let bob = service.status(id(10001)).unwrap();
        assert_eq!(bob.name, "Bob");
        assert_eq!(bob.courses_joined(), "");
        assert_eq!(bob.balance, Money::from_dollars(100));
    }
}
