use anyhow::Result;
use std::io::{BufRead, Write};

use super::prompt::{InputClosed, Prompter};
use crate::config::AppConfig;
use crate::domain::customer::UserProfile;
use crate::domain::order::{Direction, FulfillmentMode, Order, Stage};
use crate::domain::pizza::{
    AddOn, Crust, MenuOption, Pizza, PriceBreakdown, Sauce, Topping, DEFAULT_PIZZA_NAME,
};
use crate::invoice::Invoice;
use crate::metrics::Metrics;
use crate::notifications::{Customer, Inbox, LogObserver, OrderTracker};
use crate::payment::PaymentMethod;

// ============================================================================
// Session - interactive ordering flow
// ============================================================================
//
// Main menu -> compose pizza -> add-ons -> pay -> drive the order through its
// lifecycle, announcing every stage to the tracker's observers.
//
// ============================================================================

const CHOICE_PROMPT: &str = "Your choice: ";

pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: AppConfig,
    profile: UserProfile,
    tracker: OrderTracker,
    inbox: Inbox,
    metrics: Metrics,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Result<Self> {
        let profile = UserProfile::new(config.customer_name.clone())?;

        let inbox = Inbox::new();
        let mut tracker = OrderTracker::new();
        tracker.add_observer(Customer::new(profile.name(), &inbox));
        tracker.add_observer(LogObserver);

        Ok(Self {
            prompter: Prompter::new(input, output),
            config,
            profile,
            tracker,
            inbox,
            metrics: Metrics::new()?,
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.main_menu() {
            Err(e) if e.is::<InputClosed>() => {
                tracing::info!("Input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<()> {
        self.prompter.say("=== Welcome to the Pizza Ordering System ===")?;

        loop {
            self.prompter.blank()?;
            self.prompter.say("Please choose an option:")?;
            self.prompter.say("1. Place an Order")?;
            self.prompter.say("2. View Profile")?;
            self.prompter.say("3. Exit")?;
            self.prompter.say("4. Show Metrics")?;

            let choice: u32 = self.prompter.ask_number(CHOICE_PROMPT)?;
            match choice {
                1 => self.place_order()?,
                2 => self.view_profile()?,
                3 => {
                    self.prompter.blank()?;
                    self.prompter
                        .say("Thank you for using the Pizza Ordering System! Goodbye!")?;
                    return Ok(());
                }
                4 => {
                    let rendered = self.metrics.render()?;
                    self.prompter.say(rendered.trim_end())?;
                }
                _ => {
                    self.prompter.blank()?;
                    self.prompter.say("Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn place_order(&mut self) -> Result<()> {
        self.prompter.blank()?;
        self.prompter.say("=== Place Your Order ===")?;
        let mode = self.ask_fulfillment_mode()?;
        let pizza = self.compose_pizza()?;
        self.checkout(mode, pizza)
    }

    fn ask_fulfillment_mode(&mut self) -> Result<FulfillmentMode> {
        self.prompter.say("Is this order for:")?;
        self.prompter.say("1. Delivery")?;
        self.prompter.say("2. Take Away")?;
        self.prompter.ask_until(CHOICE_PROMPT, |answer| {
            let choice = answer.parse::<u32>().unwrap_or(0);
            FulfillmentMode::from_menu_choice(choice)
        })
    }

    fn ask_menu_option<T: MenuOption + std::fmt::Display>(&mut self, title: &str) -> Result<T> {
        self.prompter.blank()?;
        self.prompter.say(title)?;
        for (i, option) in T::options().iter().enumerate() {
            self.prompter.say(format!("{}. {}", i + 1, option))?;
        }
        self.prompter.ask_until(CHOICE_PROMPT, |answer| {
            let choice = answer.parse::<usize>().unwrap_or(0);
            T::from_menu_choice(choice)
        })
    }

    fn compose_pizza(&mut self) -> Result<Pizza> {
        self.prompter.blank()?;
        self.prompter.say("--- Customize Your Pizza ---")?;

        let crust: Crust = self.ask_menu_option("Choose crust:")?;
        let sauce: Sauce = self.ask_menu_option("Choose sauce:")?;

        self.prompter.blank()?;
        self.prompter
            .say("Choose toppings (type numbers separated by commas):")?;
        let topping_price = self.config.pricing.topping_price;
        for (i, topping) in Topping::options().iter().enumerate() {
            self.prompter.say(format!(
                "{}. {} ({} {:.2})",
                i + 1,
                topping,
                self.config.currency,
                topping_price
            ))?;
        }
        let toppings = self
            .prompter
            .ask_until(CHOICE_PROMPT, Topping::parse_selection)?;

        let pizza = Pizza::builder()
            .crust(crust)
            .sauce(sauce)
            .toppings(toppings)
            .name(DEFAULT_PIZZA_NAME);
        let price = self.config.pricing.menu_price(pizza.topping_count());
        let pizza = pizza.price(price).build()?;

        self.prompter.blank()?;
        self.prompter.say(format!("Your Pizza: {pizza}"))?;
        Ok(pizza)
    }

    /// Offer add-ons, take payment, optionally save, then process the order.
    fn checkout(&mut self, mode: FulfillmentMode, mut pizza: Pizza) -> Result<()> {
        let currency = self.config.currency.clone();
        let pricing = self.config.pricing.clone();

        let discounted = pricing.discounted(pricing.menu_price(pizza.toppings.len()));
        self.prompter.say(format!(
            "Seasonal Offer Applied! Final Price: {currency} {discounted:.2}"
        ))?;

        for add_on in AddOn::ALL {
            if pizza.has_add_on(add_on) {
                continue;
            }
            let price = pricing.add_on_price(add_on);
            let question = match add_on {
                AddOn::ExtraCheese => {
                    format!("Would you like Extra Cheese for {currency} {price:.2}? (yes/no): ")
                }
                AddOn::SpecialPackaging => {
                    format!("Need Special Packaging for {currency} {price:.2}? (yes/no): ")
                }
            };
            self.prompter.blank()?;
            if self.prompter.ask_yes_no(&question)? {
                pizza = pizza.with_add_on(add_on);
            }
        }

        let quote = pricing.quote(&pizza);
        self.prompter.blank()?;
        self.prompter
            .say(format!("--- Final Total: {currency} {:.2} ---", quote.total))?;

        self.prompter.say("How would you like to pay?")?;
        self.prompter.say("1. Credit Card")?;
        self.prompter.say("2. PayPal")?;
        let choice: u32 = self.prompter.ask_number(CHOICE_PROMPT)?;
        let method = PaymentMethod::from_menu_choice(choice);
        let receipt = method.strategy().pay(quote.total);
        self.metrics.record_payment(method, quote.total_cents());
        self.prompter.say(&receipt)?;

        self.prompter.blank()?;
        if self
            .prompter
            .ask_yes_no("Save this pizza as a favorite? (yes/no): ")?
        {
            match self.profile.add_favorite_pizza(pizza.clone()) {
                Ok(()) => self.prompter.say("Pizza saved to favorites!")?,
                Err(e) => self.prompter.say(e)?,
            }
        }

        self.process_order(Order::new(mode), quote)
    }

    /// Drive a freshly placed order from `Placed` to `Feedback`.
    fn process_order(&mut self, mut order: Order, quote: PriceBreakdown) -> Result<()> {
        let mode = order.fulfillment_mode();
        self.metrics.record_order_placed(mode);
        tracing::info!(order_id = %order.id(), mode = %mode, "Processing order");

        let invoice = Invoice::new(
            self.profile.name(),
            order.id(),
            mode,
            self.config.currency.clone(),
            quote,
        );

        self.announce(&order)?;
        while !order.is_complete() {
            let change = order.advance();
            self.metrics.record_stage_change(Direction::Forward, &change);
            self.announce(&order)?;

            if order.stage() == Stage::Invoiced {
                self.prompter.blank()?;
                self.prompter.say(&invoice)?;
            }
        }

        self.collect_feedback()?;

        let balance = self
            .profile
            .award_order_points(self.config.loyalty_points_per_order);
        self.prompter.blank()?;
        self.prompter.say(format!(
            "You have earned {} points for this order! Total loyalty points: {}",
            self.config.loyalty_points_per_order, balance
        ))?;
        Ok(())
    }

    /// Print the order's status and fan it out to observers.
    fn announce(&mut self, order: &Order) -> Result<()> {
        let status = order.status_text();
        self.prompter.blank()?;
        self.prompter.say(status)?;

        self.tracker.notify_observers(status);
        for notification in self.inbox.drain() {
            self.prompter.say(notification)?;
        }
        Ok(())
    }

    fn collect_feedback(&mut self) -> Result<()> {
        self.prompter.blank()?;
        let rating = self
            .prompter
            .ask_until("Please rate your experience (1-5): ", |answer| {
                match answer.parse::<u8>() {
                    Ok(r) if (1..=5).contains(&r) => Ok(r),
                    _ => Err("Rating must be a number from 1 to 5"),
                }
            })?;

        tracing::info!(rating, "Feedback received");
        self.prompter.say(format!(
            "You rated us: {rating} stars. Thanks for your feedback!"
        ))?;
        Ok(())
    }

    fn view_profile(&mut self) -> Result<()> {
        self.prompter.blank()?;
        self.prompter.say("=== Your Profile ===")?;
        self.prompter.say(format!("Name: {}", self.profile.name()))?;
        self.prompter
            .say(format!("Loyalty Points: {}", self.profile.loyalty_points()))?;

        if self.profile.favorite_pizzas().is_empty() {
            return Ok(());
        }

        self.prompter.blank()?;
        self.prompter.say("Favorite Pizzas:")?;
        let lines: Vec<String> = self
            .profile
            .favorite_pizzas()
            .iter()
            .enumerate()
            .map(|(i, pizza)| format!("{}. {}", i + 1, pizza))
            .collect();
        for line in lines {
            self.prompter.say(line)?;
        }

        self.prompter.blank()?;
        if !self
            .prompter
            .ask_yes_no("Would you like to reorder a favorite pizza? (yes/no): ")?
        {
            return Ok(());
        }

        let position: usize = self
            .prompter
            .ask_number("Select a favorite pizza to reorder by number: ")?;
        let pizza = match self.profile.reorder_favorite_pizza(position) {
            Ok(pizza) => pizza.clone(),
            Err(e) => {
                self.prompter.say(e)?;
                return Ok(());
            }
        };

        self.prompter.blank()?;
        self.prompter.say(format!("Reordered Pizza: {pizza}"))?;
        let mode = self.ask_fulfillment_mode()?;
        self.checkout(mode, pizza)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &[&str]) -> (String, UserProfile, String) {
        let mut input = script.join("\n");
        input.push('\n');

        let mut session =
            Session::new(Cursor::new(input.into_bytes()), Vec::new(), AppConfig::default())
                .unwrap();
        session.run().unwrap();

        let profile = session.profile().clone();
        let metrics = session.metrics().render().unwrap();
        let output = String::from_utf8(session.into_output()).unwrap();
        (output, profile, metrics)
    }

    fn positions(output: &str, needles: &[&str]) -> Vec<usize> {
        needles
            .iter()
            .map(|n| output.find(n).unwrap_or_else(|| panic!("missing {n:?}")))
            .collect()
    }

    // order, delivery, thin, tomato, toppings 1,2, cheese yes, packaging no,
    // credit card, save yes, rating 5, exit
    const DELIVERY_ORDER: &[&str] = &[
        "1", "1", "1", "1", "1,2", "yes", "no", "1", "yes", "5", "3",
    ];

    #[test]
    fn test_delivery_order_walks_full_lifecycle() {
        let (output, profile, _) = run_script(DELIVERY_ORDER);

        let order = positions(
            &output,
            &[
                "Order placed and awaiting preparation.",
                "Order is being prepared.",
                "Order is out for delivery.",
                "Order delivered successfully.",
                "Invoice generated. Thank you for your order!",
                "____Your Invoice____",
                "Please provide feedback for your order.",
                "You rated us: 5 stars. Thanks for your feedback!",
                "Goodbye!",
            ],
        );
        assert!(order.windows(2).all(|w| w[0] < w[1]), "out of order:\n{output}");
        assert!(!output.contains("ready for pickup"));

        assert!(output.contains("Jayan Perera notified: Order is out for delivery."));
        assert!(output.contains("Paid 1550.00 using Credit Card."));
        assert!(output.contains("Total Amount: LKR 1550.00"));

        assert_eq!(profile.favorite_pizzas().len(), 1);
        assert_eq!(profile.loyalty_points(), 10);
    }

    #[test]
    fn test_pickup_order_takes_pickup_branch() {
        // take away, stuffed, pesto, no toppings, no add-ons, paypal, don't save, rating 4
        let (output, profile, metrics) = run_script(&[
            "1", "2", "3", "3", "", "no", "no", "2", "no", "4", "3",
        ]);

        positions(
            &output,
            &[
                "Order is ready for pickup.",
                "Pickup completed. Enjoy your meal!",
                "Paid 1260.00 using PayPal.",
            ],
        );
        assert!(!output.contains("out for delivery"));
        assert!(profile.favorite_pizzas().is_empty());
        assert_eq!(profile.loyalty_points(), 10);

        assert!(metrics.contains("orders_placed_total{mode=\"pickup\"} 1"));
        assert!(metrics.contains("stage_transitions_total{direction=\"forward\",to_stage=\"feedback\"} 1"));
    }

    #[test]
    fn test_invalid_answers_are_reprompted() {
        // bad menu choice, bad mode, bad crust, bad topping, bad rating
        let (output, _, _) = run_script(&[
            "9", "1", "5", "1", "0", "1", "1", "7", "1", "no", "no", "1", "no", "8", "3", "3",
        ]);

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Unknown fulfillment mode: 5. Please try again."));
        assert!(output.contains("Invalid crust selection 0"));
        assert!(output.contains("Invalid topping selection 7"));
        assert!(output.contains("Rating must be a number from 1 to 5. Please try again."));
        assert!(output.contains("You rated us: 3 stars."));
    }

    #[test]
    fn test_profile_reorder_runs_checkout_again() {
        let mut script: Vec<&str> = DELIVERY_ORDER[..DELIVERY_ORDER.len() - 1].to_vec();
        // profile, reorder #1, take away, packaging yes, paypal, save again, rating 5, exit
        script.extend(["2", "yes", "1", "2", "yes", "2", "yes", "5", "3"]);

        let (output, profile, _) = run_script(&script);

        assert!(output.contains("Favorite Pizzas:"));
        assert!(output.contains("Reordered Pizza: Custom Pizza"));
        // Extra cheese is already on the favorite; only packaging is offered.
        assert_eq!(output.matches("Would you like Extra Cheese").count(), 1);
        assert!(output.contains("Paid 1650.00 using PayPal."));
        assert!(output.contains("is already a favorite"));
        assert!(output.contains("Order is ready for pickup."));

        assert_eq!(profile.favorite_pizzas().len(), 1);
        assert_eq!(profile.loyalty_points(), 20);
    }

    #[test]
    fn test_reorder_unknown_favorite() {
        let mut script: Vec<&str> = DELIVERY_ORDER[..DELIVERY_ORDER.len() - 1].to_vec();
        script.extend(["2", "yes", "4", "3"]);

        let (output, _, _) = run_script(&script);
        assert!(output.contains("Invalid selection 4. No such favorite pizza (have 1)"));
    }

    #[test]
    fn test_show_metrics() {
        let (output, _, _) = run_script(&["4", "3"]);
        assert!(output.contains("# TYPE revenue_cents_total counter"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (output, profile, _) = run_script(&["1", "1"]);
        assert!(output.contains("Choose crust:"));
        assert!(!output.contains("Goodbye!"));
        assert_eq!(profile.loyalty_points(), 0);
    }
}
