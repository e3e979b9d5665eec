use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use roster_domain::employee::{Department, NewEmployee, UniqueField};
use roster_employees_schema::employees;

use crate::domain::repository::EmployeeRepository;
use crate::domain::types::Employee;
use crate::error::EmployeesServiceError;

// ── Employee repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEmployeeRepository {
    pub db: DatabaseConnection,
}

impl EmployeeRepository for DbEmployeeRepository {
    async fn find_conflicts(
        &self,
        employee_id: &str,
        email: &str,
        phone_number: &str,
    ) -> Result<Vec<Employee>, EmployeesServiceError> {
        let models = employees::Entity::find()
            .filter(
                Condition::any()
                    .add(employees::Column::EmployeeId.eq(employee_id))
                    .add(employees::Column::Email.eq(email))
                    .add(employees::Column::PhoneNumber.eq(phone_number)),
            )
            .order_by_asc(employees::Column::Id)
            .all(&self.db)
            .await
            .context("find conflicting employees")?;
        let employees = models
            .into_iter()
            .map(employee_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(employees)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<i64, EmployeesServiceError> {
        let am = employees::ActiveModel {
            id: NotSet,
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            employee_id: Set(employee.employee_id.clone()),
            email: Set(employee.email.clone()),
            phone_number: Set(employee.phone_number.clone()),
            country_code: Set(employee.country_code.clone()),
            department: Set(employee.department.as_str().to_owned()),
            date_of_joining: Set(employee.date_of_joining),
            role: Set(employee.role.clone()),
            created_at: Set(Utc::now()),
        };
        match employees::Entity::insert(am).exec(&self.db).await {
            Ok(res) => Ok(res.last_insert_id),
            Err(err) => match violated_unique_field(&err) {
                Some(field) => Err(EmployeesServiceError::duplicate([field])),
                None => Err(anyhow::Error::new(err).context("insert employee").into()),
            },
        }
    }

    async fn exists(&self, field: UniqueField, value: &str) -> Result<bool, EmployeesServiceError> {
        let count = employees::Entity::find()
            .filter(unique_column(field).eq(value))
            .count(&self.db)
            .await
            .context("check employee key exists")?;
        Ok(count > 0)
    }

    async fn ping(&self) -> Result<(), EmployeesServiceError> {
        self.db.ping().await.context("ping database")?;
        Ok(())
    }
}

fn unique_column(field: UniqueField) -> employees::Column {
    match field {
        UniqueField::EmployeeId => employees::Column::EmployeeId,
        UniqueField::Email => employees::Column::Email,
        UniqueField::PhoneNumber => employees::Column::PhoneNumber,
    }
}

fn violated_unique_field(err: &DbErr) -> Option<UniqueField> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(message) => unique_field_from_violation(&message),
        _ => None,
    }
}

/// Map a unique-violation message to the field it names. Looks inside the
/// quoted constraint name when present, e.g.
/// `duplicate key value violates unique constraint "uq_employees_email"`.
fn unique_field_from_violation(message: &str) -> Option<UniqueField> {
    let constraint = message.split('"').nth(1).unwrap_or(message);
    // `employee_id` first: every constraint name contains `employee`.
    [
        ("employee_id", UniqueField::EmployeeId),
        ("phone_number", UniqueField::PhoneNumber),
        ("email", UniqueField::Email),
    ]
    .into_iter()
    .find(|(column, _)| constraint.contains(column))
    .map(|(_, field)| field)
}

fn employee_from_model(model: employees::Model) -> anyhow::Result<Employee> {
    let department = Department::parse(&model.department)
        .ok_or_else(|| anyhow!("unknown department {:?} on employee {}", model.department, model.id))?;
    Ok(Employee {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        employee_id: model.employee_id,
        email: model.email,
        phone_number: model.phone_number,
        country_code: model.country_code,
        department,
        date_of_joining: model.date_of_joining,
        role: model.role,
        created_at: model.created_at,
    })
}
