//! Example demonstrating the delivery channel factories
//!
//! Run with: cargo run --example channel_demo

use ob_core::services::channels::{MailChannel, SmsChannel};
use ob_infra::config::{MailConfig, SmsConfig};
use ob_infra::mail::create_mail_channel;
use ob_infra::sms::create_sms_channel;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Both factories fall back to the mock channels in a bare environment
    let sms = create_sms_channel(&SmsConfig::default());
    let mail = create_mail_channel(&MailConfig::default());

    println!("Testing delivery channels\n");

    // Test 1: Send a passcode over SMS
    println!("Test 1: Sending SMS passcode");
    match sms.send("9876543210", "123456").await {
        Ok(message_id) => println!("✓ SMS sent. Message ID: {}\n", message_id),
        Err(e) => println!("✗ Failed to send SMS: {}\n", e),
    }

    // Test 2: Invalid mobile number
    println!("Test 2: Testing invalid mobile number");
    match sms.send("98765-43210", "123456").await {
        Ok(_) => println!("✗ Should have failed for invalid number\n"),
        Err(e) => println!("✓ Correctly rejected invalid number: {}\n", e),
    }

    // Test 3: Send a passcode over email
    println!("Test 3: Sending OTP email");
    match mail
        .send("jane@example.com", "Your OTP Code", "Your OTP is: 123456")
        .await
    {
        Ok(message_id) => println!("✓ Email sent. Message ID: {}\n", message_id),
        Err(e) => println!("✗ Failed to send email: {}\n", e),
    }

    // Test 4: Invalid email address
    println!("Test 4: Testing invalid email address");
    match mail.send("not-an-email", "Subject", "Body").await {
        Ok(_) => println!("✗ Should have failed for invalid address\n"),
        Err(e) => println!("✓ Correctly rejected invalid address: {}\n", e),
    }

    Ok(())
}
