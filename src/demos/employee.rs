use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub salary: f64,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }

    /// A copy of this employee earning `amount` more.
    pub fn with_raise(&self, amount: f64) -> Self {
        Self {
            salary: self.salary + amount,
            ..self.clone()
        }
    }

    /// Salary rounded to a whole amount, usable as a map key.
    pub fn whole_salary(&self) -> u64 {
        self.salary.round() as u64
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee {{ id: {}, name: {}, salary: {:.1} }}",
            self.id, self.name, self.salary
        )
    }
}

pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "Jeff Bezos", 100_000.0),
        Employee::new(2, "Bill Gates", 200_000.0),
        Employee::new(3, "Mark Zuckerberg", 300_000.0),
    ]
}

/// First and last names of the sample employees, one list per person.
pub fn nested_names() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Jeff", "Bezos"],
        vec!["Bill", "Gates"],
        vec!["Mark", "Zuckerberg"],
    ]
}
