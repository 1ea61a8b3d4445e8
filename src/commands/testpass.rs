use anyhow::Result;
use rpawogen::alphabet::find_similar_chars;
use rpawogen::strength::assess_password;

pub fn test_password(password: &str, check_confusion: bool) -> Result<()> {
    let assessment = assess_password(password);
    println!("Password strength: {} (score: {}/4)", assessment.rating, assessment.score);
    if !assessment.feedback.is_empty() {
        println!("Suggestions: {}", assessment.feedback);
    }

    if check_confusion {
        let confusing = find_similar_chars(password);
        if !confusing.is_empty() {
            println!("Potentially confusing characters: {:?}", confusing);
        } else {
            println!("No confusing characters detected");
        }
    }
    Ok(())
}
