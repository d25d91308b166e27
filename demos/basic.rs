use lifostack::*;

fn main() -> Result<(), StackError> {
  let kind: StackKind = std::env::args().nth(1).as_deref().unwrap_or("array").parse()?;
  let mut s = AnyStack::create(kind, 3);
  for word in ["one", "two", "three", "four"] {
    if let Err(overflow) = s.push(word) {
      println!("{} stack refused {:?}: {}", kind, overflow.value, overflow);
    }
  }
  while let Some(word) = s.pop() {
    println!("popped: {}", word);
  }
  s.destroy();
  Ok(())
}
